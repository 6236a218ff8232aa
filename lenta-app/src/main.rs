use anyhow::Context;
use lenta_app::{logging, pipeline};
use lenta_infra::app_config::Config;
use lenta_infra::HttpStoreSource;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;
    logging::init(&config.output.logs_dir)?;

    tracing::info!("Starting Lenta coffee price feed");

    let source = match HttpStoreSource::new(&config.api, &config.parser) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "Failed to set up store client");
            println!("Run failed: {}", e);
            return Ok(());
        }
    };

    match pipeline::run(&config, &source).await {
        Ok(report) => {
            println!(
                "Run complete: {}, {}, {} written to {}",
                pipeline::GEO_FILE,
                pipeline::SKU_FILE,
                pipeline::PRICES_FILE,
                config.output.data_dir.display()
            );
            if !report.is_complete() {
                println!("{} output file(s) could not be saved, see log", report.failed.len());
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Run aborted");
            println!("Run failed: {}", e);
        }
    }

    Ok(())
}
