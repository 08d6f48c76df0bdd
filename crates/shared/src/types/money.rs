//! Money amount value type with euro and cent components.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are stored as a whole-unit count plus a cent count in `0..=99`
//! and all arithmetic runs on integer cent totals.
//!
//! Arithmetic yields magnitudes only: `subtract` and `multiply` take the
//! absolute value of the combined cent total, so `05,00 - 08,00 = 03,00`.
//! Callers that need a signed difference must track the sign themselves.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::{debug, trace};

use crate::error::{MoneyError, MoneyResult};

/// Cents per whole unit.
const SUBUNITS_PER_UNIT: u64 = 100;

/// Largest valid cent value.
const MAX_FRACTION: u8 = 99;

/// Maximum number of significant digits in the integer part of a parsed amount.
const MAX_WHOLE_DIGITS: usize = 7;

/// An immutable, non-negative monetary amount (e.g. euros and cents).
///
/// Ordering compares `whole` first, then `fraction`. Serializes as the
/// canonical `"WW,FF"` string.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct MoneyAmount {
    whole: u32,
    fraction: u8,
}

impl MoneyAmount {
    /// The zero amount, `00,00`.
    pub const ZERO: Self = Self {
        whole: 0,
        fraction: 0,
    };

    /// Creates a new amount from whole units and cents.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::FractionOutOfRange` if `fraction > 99`.
    ///
    /// # Example
    ///
    /// ```
    /// use kino_shared::MoneyAmount;
    ///
    /// let price = MoneyAmount::new(9, 99).unwrap();
    /// assert_eq!(price.to_string(), "09,99");
    /// ```
    pub const fn new(whole: u32, fraction: u8) -> MoneyResult<Self> {
        if fraction > MAX_FRACTION {
            return Err(MoneyError::FractionOutOfRange(fraction));
        }
        Ok(Self { whole, fraction })
    }

    /// Creates an amount from a total number of cents.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the whole-unit count does not fit a `u32`.
    pub fn from_subunits(total: u64) -> MoneyResult<Self> {
        let whole = u32::try_from(total / SUBUNITS_PER_UNIT).map_err(|_| {
            trace!(total, "cent total exceeds representable range");
            MoneyError::Overflow
        })?;
        // remainder is always below 100
        #[allow(clippy::cast_possible_truncation)]
        let fraction = (total % SUBUNITS_PER_UNIT) as u8;
        debug_assert!(fraction <= MAX_FRACTION);

        Ok(Self { whole, fraction })
    }

    /// Returns the whole-unit count.
    #[must_use]
    pub const fn whole(&self) -> u32 {
        self.whole
    }

    /// Returns the cent count, always in `0..=99`.
    #[must_use]
    pub const fn fraction(&self) -> u8 {
        self.fraction
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.whole == 0 && self.fraction == 0
    }

    /// Returns the total number of cents, `whole * 100 + fraction`.
    #[must_use]
    pub fn subunits(&self) -> i64 {
        i64::from(self.whole) * 100 + i64::from(self.fraction)
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the sum does not fit.
    #[allow(clippy::should_implement_trait)] // fallible, so not `std::ops::Add`
    pub fn add(self, other: Self) -> MoneyResult<Self> {
        let total = self
            .subunits()
            .checked_add(other.subunits())
            .ok_or(MoneyError::Overflow)?;
        Self::from_magnitude(total)
    }

    /// Subtracts `other`, returning the magnitude of the difference.
    ///
    /// The result is never negative: `03,00 - 08,00 = 05,00`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the difference does not fit.
    ///
    /// # Example
    ///
    /// ```
    /// use kino_shared::MoneyAmount;
    ///
    /// let five = MoneyAmount::new(5, 0).unwrap();
    /// let eight = MoneyAmount::new(8, 0).unwrap();
    /// assert_eq!(five.subtract(eight).unwrap(), MoneyAmount::new(3, 0).unwrap());
    /// ```
    pub fn subtract(self, other: Self) -> MoneyResult<Self> {
        let total = self
            .subunits()
            .checked_sub(other.subunits())
            .ok_or(MoneyError::Overflow)?;
        Self::from_magnitude(total)
    }

    /// Multiplies the amount by a non-zero integer factor.
    ///
    /// The sign of the factor is ignored.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::ZeroMultiplier` if `factor == 0`, or
    /// `MoneyError::Overflow` if the product does not fit.
    pub fn multiply(self, factor: i32) -> MoneyResult<Self> {
        if factor == 0 {
            return Err(MoneyError::ZeroMultiplier);
        }
        let total = self
            .subunits()
            .checked_mul(i64::from(factor))
            .ok_or(MoneyError::Overflow)?;
        Self::from_magnitude(total)
    }

    fn from_magnitude(total: i64) -> MoneyResult<Self> {
        Self::from_subunits(total.unsigned_abs())
    }

    /// Returns true if `self` orders strictly after `other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Returns true if `self` orders strictly before `other`.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Returns `whole + fraction`.
    ///
    /// Equal amounts share a hash code, but many distinct amounts collide
    /// (`05,03`, `03,05` and `04,04` all give 8). Do not rely on uniqueness.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        u64::from(self.whole) + u64::from(self.fraction)
    }

    /// Parses a decimal-comma amount such as `"12,50"`.
    ///
    /// Grammar: optional leading zeros, up to seven significant integer
    /// digits, then optionally a comma followed by zero, one or two digits.
    /// A single fractional digit counts tens of cents (`"5,5"` is `05,50`).
    /// The empty string and a lone `","` are zero. Signs, thousands
    /// separators, currency symbols and whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidFormat` if `text` does not match the grammar.
    pub fn parse(text: &str) -> MoneyResult<Self> {
        let reject = || {
            debug!(input = text, "rejected money amount");
            MoneyError::InvalidFormat(text.to_string())
        };

        let (integer_digits, fraction_digits) = match text.split_once(',') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        let whole = parse_whole(integer_digits).ok_or_else(reject)?;
        let fraction = match fraction_digits {
            Some(digits) => parse_fraction(digits).ok_or_else(reject)?,
            None => 0,
        };

        Self::new(whole, fraction)
    }
}

fn parse_whole(digits: &str) -> Option<u32> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_WHOLE_DIGITS {
        return None;
    }
    Some(
        significant
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0')),
    )
}

fn parse_fraction(digits: &str) -> Option<u8> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.as_bytes() {
        [] => Some(0),
        [tens] => Some((tens - b'0') * 10),
        [b'0', ones] => Some(ones - b'0'),
        [tens, ones] => Some((tens - b'0') * 10 + (ones - b'0')),
        _ => None,
    }
}

impl Hash for MoneyAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02},{:02}", self.whole, self.fraction)
    }
}

impl FromStr for MoneyAmount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<MoneyAmount> for Decimal {
    fn from(amount: MoneyAmount) -> Self {
        Decimal::new(amount.subunits(), 2)
    }
}

impl TryFrom<Decimal> for MoneyAmount {
    type Error = MoneyError;

    /// Accepts non-negative decimals with at most two decimal places.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value < Decimal::ZERO || value.normalize().scale() > 2 {
            return Err(MoneyError::InvalidFormat(value.to_string()));
        }
        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_u64())
            .ok_or(MoneyError::Overflow)?;
        Self::from_subunits(cents)
    }
}
