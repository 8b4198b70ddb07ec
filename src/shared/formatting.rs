//! Pure display-formatting helpers.
//!
//! Prices are carried as integer cents end to end, so formatting is plain
//! integer arithmetic with no rounding step.

use crate::shared::constants::CURRENCY_SYMBOL;

/// Render a price in cents as a currency string with exactly two fractional
/// digits, e.g. `4999` -> `"$49.99"`.
pub fn format_price(cents: u32) -> String {
    format!("{}{}.{:02}", CURRENCY_SYMBOL, cents / 100, cents % 100)
}

/// Count-prefixed English pluralization: `"1 Color"`, `"3 Colors"`.
/// Zero takes the plural form.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("1 {}", word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_fraction_digits() {
        assert_eq!(format_price(10995), "$109.95");
        assert_eq!(format_price(5000), "$50.00");
    }

    #[test]
    fn test_format_price_pads_cents() {
        assert_eq!(format_price(205), "$2.05");
        assert_eq!(format_price(9), "$0.09");
    }

    #[test]
    fn test_format_price_zero() {
        assert_eq!(format_price(0), "$0.00");
    }

    #[test]
    fn test_format_price_round_trips_to_cents() {
        for cents in [0u32, 9, 100, 4999, 10995, 250000] {
            let text = format_price(cents);
            let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(digits.parse::<u32>().unwrap(), cents);
        }
    }

    #[test]
    fn test_pluralize_one() {
        assert_eq!(pluralize("Color", 1), "1 Color");
    }

    #[test]
    fn test_pluralize_zero_and_many() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
        assert_eq!(pluralize("Color", 2), "2 Colors");
    }
}
