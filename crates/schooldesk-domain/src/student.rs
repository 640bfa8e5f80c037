use crate::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub grade: String,
    pub enrollment_date: NaiveDate,
    pub status: Status,
}
