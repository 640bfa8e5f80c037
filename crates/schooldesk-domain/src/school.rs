use crate::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub school_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub principal_name: String,
    pub established_date: NaiveDate,
    pub status: Status,
}
