pub mod price;
pub mod product;
pub mod settings;
pub mod store;
pub mod summary;

/// Rows written to one of the flat tabular outputs.
///
/// The header is declared separately from the serde field names so that an
/// empty table still gets its header line.
pub trait TabularRow: serde::Serialize {
    const HEADERS: &'static [&'static str];
}
