//! Formatting utilities used for CLI and export outputs.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use unicode_width::UnicodeWidthStr;

/// Pad to a display width (not a byte length), so accented labels line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Amount as entered: trailing zeros dropped, never rounded.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Horizontal bar proportional to `value / max`, for the terminal charts.
/// Negative values draw with a lighter glyph.
pub fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    if max <= Decimal::ZERO || width == 0 {
        return String::new();
    }

    let ratio = (value.abs() / max).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
    let cells = (ratio * width as f64).round() as usize;
    let glyph = if value < Decimal::ZERO { "░" } else { "█" };
    glyph.repeat(cells)
}

/// Percentage with one decimal, e.g. `42.5%`.
pub fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn amounts_are_normalized_not_rounded() {
        assert_eq!(format_amount(Decimal::from_str("10.50").unwrap()), "10.5");
        assert_eq!(format_amount(Decimal::from_str("-3.125").unwrap()), "-3.125");
        assert_eq!(format_amount(Decimal::from(13)), "13");
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(Decimal::from(10), Decimal::from(10), 20).chars().count(), 20);
        assert_eq!(bar(Decimal::from(5), Decimal::from(10), 20).chars().count(), 10);
        assert_eq!(bar(Decimal::from(-5), Decimal::from(10), 4), "░░");
        assert_eq!(bar(Decimal::ONE, Decimal::ZERO, 20), "");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("Descripción", 13), "Descripción  ");
        assert_eq!(pad_left("7", 3), "  7");
    }
}
