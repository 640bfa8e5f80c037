use crate::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub role_name: String,
    pub description: String,
    pub created_date: NaiveDate,
    pub status: Status,
}
