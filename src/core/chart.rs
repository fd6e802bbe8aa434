//! Terminal rendering of the two chart views.

use crate::core::calculator::aggregate::CategoryTotals;
use crate::core::calculator::closing_series::{SeriesPoint, shares};
use crate::utils::formatting::{bar, pad_left, pad_right, percent};
use crate::utils::format_amount;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 30;

pub struct ChartLogic;

impl ChartLogic {
    /// Bars of summed amount per category, in first-seen order.
    pub fn render_categories(totals: &CategoryTotals) -> String {
        if totals.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let label_w = totals
            .iter()
            .map(|t| UnicodeWidthStr::width(t.category.as_str()))
            .max()
            .unwrap_or(0);
        let amounts: Vec<String> = totals.iter().map(|t| format_amount(t.total)).collect();
        let amount_w = amounts.iter().map(|a| a.len()).max().unwrap_or(0);
        let max = totals.max_abs();

        let mut out = String::new();
        for (t, amount) in totals.iter().zip(&amounts) {
            out.push_str(&format!(
                "{} {} {} ({})\n",
                pad_right(&t.category, label_w),
                pad_left(amount, amount_w),
                bar(t.total, max, BAR_WIDTH),
                t.count
            ));
        }
        out.push_str(&format!(
            "{} {}\n",
            pad_right("TOTAL", label_w),
            pad_left(&format_amount(totals.total()), amount_w)
        ));
        out
    }

    /// Proportion view of a cash closing.
    pub fn render_closing(series: &[SeriesPoint]) -> String {
        let label_w = series.iter().map(|p| p.label.len()).max().unwrap_or(0);
        let amounts: Vec<String> = series.iter().map(|p| format_amount(p.value)).collect();
        let amount_w = amounts.iter().map(|a| a.len()).max().unwrap_or(0);

        let mut out = String::new();
        for ((p, amount), share) in series.iter().zip(&amounts).zip(shares(series)) {
            let cells = (share.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
            out.push_str(&format!(
                "{} {} {} {}\n",
                pad_right(p.label, label_w),
                pad_left(amount, amount_w),
                pad_left(&percent(share), 6),
                "█".repeat(cells)
            ));
        }
        out
    }
}
