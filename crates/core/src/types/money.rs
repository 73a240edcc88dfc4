//! Type-safe price representation using decimal arithmetic.
//!
//! The boutique trades in CFA francs (XOF), which have no minor unit, so
//! amounts are whole francs and display formatting groups thousands the
//! French way: `12 500 FCFA`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., francs, not centimes).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A whole-franc CFA price.
    #[must_use]
    pub fn fcfa(francs: i64) -> Self {
        Self::new(Decimal::from(francs), CurrencyCode::Xof)
    }

    /// The zero price in the given currency.
    #[must_use]
    pub fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }
}

// The shop is single-currency; arithmetic keeps the left operand's currency.

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(CurrencyCode::default()), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.amount.round();
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let grouped = group_thousands(&rounded.abs().to_string());
        match self.currency_code {
            CurrencyCode::Xof => write!(f, "{sign}{grouped} FCFA"),
            other => write!(f, "{sign}{grouped} {}", other.code()),
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// West African CFA franc.
    #[default]
    Xof,
    Eur,
    Usd,
}

impl CurrencyCode {
    /// The ISO 4217 alphabetic code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Xof => "XOF",
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }
}

/// Insert a space between every group of three digits, from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::fcfa(12_500).to_string(), "12 500 FCFA");
        assert_eq!(Price::fcfa(950_000).to_string(), "950 000 FCFA");
        assert_eq!(Price::fcfa(1_250_000).to_string(), "1 250 000 FCFA");
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::fcfa(0).to_string(), "0 FCFA");
        assert_eq!(Price::fcfa(500).to_string(), "500 FCFA");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::fcfa(-7_000).to_string(), "-7 000 FCFA");
    }

    #[test]
    fn test_line_arithmetic() {
        let unit = Price::fcfa(45_000);
        let line = unit * 3;
        assert_eq!(line.amount, Decimal::from(135_000));
        assert_eq!(line.currency_code, CurrencyCode::Xof);

        let total: Price = [Price::fcfa(1_000), Price::fcfa(2_500)].into_iter().sum();
        assert_eq!(total, Price::fcfa(3_500));
    }
}
