use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct Department {
    /// Store-assigned identity; absent on insert payloads.
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}
