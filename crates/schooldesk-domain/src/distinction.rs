use crate::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An award or recognition category that can be granted to students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distinction {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub created_date: NaiveDate,
    pub status: Status,
}
