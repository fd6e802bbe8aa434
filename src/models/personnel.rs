use crate::utils::time::serde_hhmm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A staff attendance line. `note` already carries the lateness message,
/// if any, as it was when the entry was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelEntry {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "entrada", with = "serde_hhmm")]
    pub check_in: NaiveTime,
    #[serde(rename = "salida", with = "serde_hhmm")]
    pub check_out: NaiveTime,
    #[serde(rename = "observacion", default)]
    pub note: String,
}
