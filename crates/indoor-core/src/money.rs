//! Money helpers
//!
//! Prices travel as `f64` on the wire. Sums and products are computed in
//! `Decimal` and rounded to cents so totals never drift.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal; non-finite input counts as zero
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        log::error!("Non-finite amount {value} in monetary calculation, using zero");
        Decimal::ZERO
    })
}

/// Round to cents, midpoint away from zero
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert back to f64 for the wire, rounded to cents
pub fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or_default()
}

/// `unit_price × quantity`, exact
pub fn line_total(unit_price: f64, quantity: u32) -> Decimal {
    to_decimal(unit_price) * Decimal::from(quantity)
}

/// Format as `$1,234.56`
pub fn format(value: Decimal) -> String {
    let value = round(value);
    let negative = value.is_sign_negative() && !value.is_zero();
    let text = format!("{:.2}", value.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Format an f64 amount
pub fn format_f64(value: f64) -> String {
    format(to_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_totals_do_not_drift() {
        let total: Decimal = [line_total(89.99, 3), line_total(0.1, 3)].into_iter().sum();
        assert_eq!(to_f64(total), 270.27);
    }

    #[test]
    fn test_round_midpoint_away_from_zero() {
        assert_eq!(round(Decimal::new(12345, 3)), Decimal::new(1235, 2));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_f64(12458.0), "$12,458.00");
        assert_eq!(format_f64(59.99), "$59.99");
        assert_eq!(format_f64(999.999), "$1,000.00");
        assert_eq!(format_f64(-5.5), "-$5.50");
        assert_eq!(format_f64(0.0), "$0.00");
    }
}
