use crate::models::CashClosingSummary;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub const LABEL_DISTRIBUTED: &str = "Distributed cash";
pub const LABEL_DRAWER: &str = "Drawer cash";
pub const LABEL_REMAINING: &str = "Remaining cash";
pub const LABEL_TRANSFERS: &str = "Total transfers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: Decimal,
}

/// The closing as a fixed four-point series, always in the order
/// distributed, drawer, remaining, transfers. Values pass through as-is.
pub fn closing_series(summary: &CashClosingSummary) -> [SeriesPoint; 4] {
    [
        SeriesPoint {
            label: LABEL_DISTRIBUTED,
            value: summary.distributed_cash,
        },
        SeriesPoint {
            label: LABEL_DRAWER,
            value: summary.drawer_cash,
        },
        SeriesPoint {
            label: LABEL_REMAINING,
            value: summary.remaining_cash,
        },
        SeriesPoint {
            label: LABEL_TRANSFERS,
            value: summary.total_transfers,
        },
    ]
}

/// Proportion of each point over the series total, for a pie-style view.
/// All zeros when the total is zero.
pub fn shares(series: &[SeriesPoint]) -> Vec<f64> {
    let total: Decimal = series.iter().map(|p| p.value).sum();
    if total.is_zero() {
        return vec![0.0; series.len()];
    }
    series
        .iter()
        .map(|p| (p.value / total).to_f64().unwrap_or(0.0))
        .collect()
}
