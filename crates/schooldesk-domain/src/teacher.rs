use crate::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub department: String,
    pub join_date: NaiveDate,
    pub status: Status,
}
