//! Money amounts stored as whole cents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Amount in cents. Arithmetic saturates instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u32);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u32 {
        self.0
    }

    /// Price of `quantity` units
    pub fn times(&self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(quantity))
    }

    pub fn saturating_add(&self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }

    /// Format with the given currency symbol and a thousands separator,
    /// e.g. `$1,234.50`.
    pub fn format_with(&self, symbol: &str) -> String {
        let whole = self.0 / 100;
        let fraction = self.0 % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        format!("{}{}.{:02}", symbol, grouped, fraction)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| acc.saturating_add(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(Price(250).to_string(), "$2.50");
        assert_eq!(Price(5).to_string(), "$0.05");
        assert_eq!(Price(0).to_string(), "$0.00");
        assert_eq!(Price(123_456_78).to_string(), "$123,456.78");
        assert_eq!(Price(100_000).format_with("€"), "€1,000.00");
    }

    #[test]
    fn test_times_and_sum() {
        assert_eq!(Price(340).times(3), Price(1020));
        assert_eq!(Price(u32::MAX).times(2), Price(u32::MAX));
        let total: Price = [Price(250), Price(350), Price(400)].into_iter().sum();
        assert_eq!(total, Price(1000));
    }
}
