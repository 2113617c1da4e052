use bigdecimal::BigDecimal;
use bigdecimal::ParseBigDecimalError;
use num_traits::ToPrimitive;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::common::error::PortfolioError;

const SCALE: i64 = 10_000;

/// Monetary value stored as a scaled integer with 4 decimal places.
///
/// Balances, deposits, and interest are all `Money` so they cannot be mixed up
/// with rates or month counts, and plain float drift never reaches a stored
/// balance. Raw user input is parsed through `BigDecimal`, which rejects
/// non-numeric text and overflowing magnitudes; interest math crosses into
/// `f64` only through the checked [`Money::try_from_f64`] bridge.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use portfolio_sim::common::money::Money;
///
/// let amount = Money::from_str("2500.50").unwrap();
/// assert_eq!(amount.as_i64(), 25_005_000);
/// assert_eq!(amount.to_string_4dp(), "2500.5000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Builds a value from whole currency units (e.g. `from_major(100)` is 100.0000).
    pub fn from_major(value: i64) -> Self {
        Money(value * SCALE)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Lossy view for interest formulas; round-trips through [`Money::try_from_f64`].
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Converts a computed float back into money, rounding to 4 decimal places.
    ///
    /// Fails with [`PortfolioError::InvalidBalance`] when the value is not
    /// finite or does not fit the scaled `i64` range.
    pub fn try_from_f64(value: f64) -> Result<Self, PortfolioError> {
        if !value.is_finite() {
            return Err(PortfolioError::InvalidBalance(value));
        }
        let scaled = (value * SCALE as f64).round();
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(PortfolioError::InvalidBalance(value));
        }
        Ok(Money(scaled as i64))
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}
