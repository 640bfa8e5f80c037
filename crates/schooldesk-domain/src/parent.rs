use crate::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Names of the students this parent is linked to.
    #[serde(default)]
    pub associated_students: Vec<String>,
    pub registration_date: NaiveDate,
    pub status: Status,
}
