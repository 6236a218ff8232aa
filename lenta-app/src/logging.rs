use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "lenta_app=info,lenta_infra=info,lenta_catalog=info";

/// Stdout plus a daily file `lenta_parser_YYYYMMDD.log` under `logs_dir`.
pub fn init(logs_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let path = logs_dir.join(format!(
        "lenta_parser_{}.log",
        chrono::Local::now().format("%Y%m%d")
    ));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
