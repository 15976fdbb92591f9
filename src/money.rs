//! Price entry and display helpers.
//!
//! Prices travel as integer cents; the admin types decimal reais into the
//! form and sees pt-BR formatted values in the tables.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("not a number")]
    Invalid,

    #[error("must be positive")]
    NotPositive,

    #[error("more precise than one cent")]
    SubCent,
}

/// Parse a decimal price typed by the user ("12.50" or "12,50") into cents.
pub fn parse_price(input: &str) -> Result<i64, PriceError> {
    let normalized = input.trim().replace(',', ".");
    let value: Decimal = normalized.parse().map_err(|_| PriceError::Invalid)?;

    if value <= Decimal::ZERO {
        return Err(PriceError::NotPositive);
    }

    let cents = value * Decimal::from(100);
    if cents.normalize().scale() > 0 {
        return Err(PriceError::SubCent);
    }

    cents.to_i64().ok_or(PriceError::Invalid)
}

/// Format cents the way the dashboard shows prices: "R$ 12,50", with dots
/// grouping thousands.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let reais = (cents / 100).to_string();
    let centavos = cents % 100;

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (position, digit) in reais.chars().enumerate() {
        if position > 0 && (reais.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$ {grouped},{centavos:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_reais_into_cents() {
        assert_eq!(parse_price("12.50"), Ok(1250));
        assert_eq!(parse_price("12,50"), Ok(1250));
        assert_eq!(parse_price(" 49.9 "), Ok(4990));
        assert_eq!(parse_price("100"), Ok(10000));
    }

    #[test]
    fn rejects_non_positive_and_garbage() {
        assert_eq!(parse_price("0"), Err(PriceError::NotPositive));
        assert_eq!(parse_price("-3.50"), Err(PriceError::NotPositive));
        assert_eq!(parse_price("abc"), Err(PriceError::Invalid));
        assert_eq!(parse_price(""), Err(PriceError::Invalid));
    }

    #[test]
    fn rejects_sub_cent_precision() {
        assert_eq!(parse_price("12.505"), Err(PriceError::SubCent));
    }

    #[test]
    fn formats_cents_in_pt_br() {
        assert_eq!(format_price(1250), "R$ 12,50");
        assert_eq!(format_price(5), "R$ 0,05");
        assert_eq!(format_price(123456789), "R$ 1.234.567,89");
    }

    #[test]
    fn price_round_trips_through_parse_and_format() {
        let cents = parse_price("12.50").unwrap();
        assert_eq!(format_price(cents), "R$ 12,50");
    }
}
