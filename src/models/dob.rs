use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Transient search criteria: one date bound for an exact date-of-birth
/// match, or two bounds for an inclusive range. Not persisted.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DobQuery {
    pub dob1: NaiveDate,
    pub dob2: Option<NaiveDate>,
}
