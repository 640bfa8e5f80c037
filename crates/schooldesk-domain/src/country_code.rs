use crate::Status;
use serde::{Deserialize, Serialize};

/// International dialing prefix for a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCode {
    pub id: String,
    pub country_name: String,
    /// Prefix including the plus sign, e.g. `+44`.
    pub dial_code: String,
    pub status: Status,
}
