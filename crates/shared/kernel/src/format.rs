//! Locale-aware rendering of [`Money`] amounts.

use shop_domain::Money;
use shop_domain::config::{CurrencyConfig, SymbolPosition};

/// Keeps the amount and its symbol on one line.
const NO_BREAK_SPACE: char = '\u{a0}';
/// Largest power of ten that fits the minor-unit scale of an `i64`.
const MAX_FRACTION_DIGITS: u8 = 18;

/// Formats money amounts according to a [`CurrencyConfig`].
///
/// Cheap to clone and comparable, so it can be handed to components as a prop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    currency: CurrencyConfig,
}

impl CurrencyFormatter {
    #[must_use]
    pub const fn new(currency: CurrencyConfig) -> Self {
        Self { currency }
    }

    #[must_use]
    pub const fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }

    /// Renders `amount` with grouping, fixed fraction digits and the currency symbol.
    #[must_use]
    pub fn format(&self, amount: Money) -> String {
        let number = self.format_number(amount.minor().unsigned_abs());
        let sign = if amount.is_negative() { "-" } else { "" };
        let symbol = self.currency.symbol.as_str();

        let gap = if self.currency.spaced && !symbol.is_empty() {
            NO_BREAK_SPACE.to_string()
        } else {
            String::new()
        };

        match self.currency.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{symbol}{gap}{number}"),
            SymbolPosition::Suffix => format!("{sign}{number}{gap}{symbol}"),
        }
    }

    fn format_number(&self, minor: u64) -> String {
        let digits = self.currency.fraction_digits.min(MAX_FRACTION_DIGITS);
        let scale = 10_u64.pow(u32::from(digits));
        let whole = group_thousands(minor / scale, self.currency.group_separator);

        if digits == 0 {
            return whole;
        }

        let fraction = minor % scale;
        format!(
            "{whole}{}{fraction:0width$}",
            self.currency.decimal_separator,
            width = usize::from(digits)
        )
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dkk() -> CurrencyFormatter {
        CurrencyFormatter::new(CurrencyConfig::danish_krone())
    }

    fn usd() -> CurrencyFormatter {
        CurrencyFormatter::new(CurrencyConfig::us_dollar())
    }

    #[test]
    fn formats_danish_krone() {
        assert_eq!(dkk().format(Money::from_minor(25_000)), "250,00\u{a0}kr.");
        assert_eq!(dkk().format(Money::from_minor(123_456_789)), "1.234.567,89\u{a0}kr.");
        assert_eq!(dkk().format(Money::ZERO), "0,00\u{a0}kr.");
    }

    #[test]
    fn formats_us_dollar() {
        assert_eq!(usd().format(Money::from_minor(5)), "$0.05");
        assert_eq!(usd().format(Money::from_minor(100_000)), "$1,000.00");
    }

    #[test]
    fn negative_amounts_lead_with_sign() {
        assert_eq!(dkk().format(Money::from_minor(-1_050)), "-10,50\u{a0}kr.");
        assert_eq!(usd().format(Money::from_minor(-1_050)), "-$10.50");
    }

    #[test]
    fn zero_fraction_digits_skip_decimal_separator() {
        let mut currency = CurrencyConfig::danish_krone();
        currency.fraction_digits = 0;
        currency.symbol = "kr".to_owned();
        let formatter = CurrencyFormatter::new(currency);
        assert_eq!(formatter.format(Money::from_minor(1_500)), "1.500\u{a0}kr");
    }

    #[test]
    fn extreme_amounts_do_not_panic() {
        let formatted = dkk().format(Money::from_minor(i64::MIN));
        assert!(formatted.starts_with("-92.233.720.368.547.758,08"));
    }

    proptest! {
        #[test]
        fn grouping_preserves_digits(value in any::<u64>()) {
            let grouped = group_thousands(value, '.');
            prop_assert_eq!(grouped.replace('.', ""), value.to_string());
            prop_assert!(grouped.split('.').skip(1).all(|group| group.len() == 3));
        }
    }
}
