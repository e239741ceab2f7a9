use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct Employee {
    /// Store-assigned identity; absent on insert payloads.
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub dob: NaiveDate,
    /// Identity of the department this employee belongs to.
    pub depid: i64,
    #[serde(default)]
    pub salary: f64,
}
