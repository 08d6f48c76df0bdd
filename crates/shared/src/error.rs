//! Error types for money amount construction, arithmetic, and parsing.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Money amount error types.
///
/// `FractionOutOfRange` and `ZeroMultiplier` are contract violations: the
/// caller broke a precondition. `InvalidFormat` is an input error and is the
/// only kind user-supplied text can trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Cent value above 99.
    #[error("Fraction out of range: {0} (must be 0..=99)")]
    FractionOutOfRange(u8),

    /// Multiplier of zero passed to `multiply`.
    #[error("Multiplier must not be zero")]
    ZeroMultiplier,

    /// Result does not fit into the amount representation.
    #[error("Amount overflow")]
    Overflow,

    /// Text does not match the decimal-comma amount grammar.
    #[error("Invalid money amount format: {0:?}")]
    InvalidFormat(String),
}

impl MoneyError {
    /// Returns true if the error signals a broken precondition rather than bad input.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::FractionOutOfRange(_) | Self::ZeroMultiplier)
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::FractionOutOfRange(_) => "FRACTION_OUT_OF_RANGE",
            Self::ZeroMultiplier => "ZERO_MULTIPLIER",
            Self::Overflow => "OVERFLOW",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
        }
    }
}
