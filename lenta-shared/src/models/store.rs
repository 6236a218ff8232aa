use serde::{Deserialize, Serialize};

use super::TabularRow;

/// A retail store as reported by the stores endpoint.
///
/// Fields are kept verbatim, coordinates included; a field missing upstream
/// is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub latitude: String,
    pub longitude: String,
    pub phone: String,
    pub working_hours: String,
}

impl TabularRow for Store {
    const HEADERS: &'static [&'static str] = &[
        "store_id",
        "name",
        "address",
        "city",
        "latitude",
        "longitude",
        "phone",
        "working_hours",
    ];
}
