use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// End-of-period reconciliation: four independent amounts, never
/// cross-checked against each other or against the expense list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashClosingSummary {
    #[serde(rename = "dineroReparto", with = "rust_decimal::serde::float")]
    pub distributed_cash: Decimal,
    #[serde(rename = "dineroCaja", with = "rust_decimal::serde::float")]
    pub drawer_cash: Decimal,
    #[serde(rename = "dineroQueda", with = "rust_decimal::serde::float")]
    pub remaining_cash: Decimal,
    #[serde(rename = "totalTransferencias", with = "rust_decimal::serde::float")]
    pub total_transfers: Decimal,
}
