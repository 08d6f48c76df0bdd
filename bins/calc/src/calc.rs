//! Left-to-right evaluation of money amount expressions.

use std::cmp::Ordering;

use kino_shared::{MoneyAmount, MoneyError};
use thiserror::Error;
use tracing::debug;

/// Calculator errors.
#[derive(Debug, Error)]
pub enum CalcError {
    /// No starting amount given.
    #[error("usage: kino-calc <amount> [<op> <operand>]...")]
    MissingAmount,

    /// Operator without a following operand.
    #[error("Operator {0:?} is missing its operand")]
    MissingOperand(String),

    /// Token in operator position is not a known operator.
    #[error("Unknown operator: {0:?} (expected +, -, x, * or cmp)")]
    UnknownOperator(String),

    /// Multiplication operand is not an integer.
    #[error("Invalid multiplier: {0:?}")]
    InvalidMultiplier(String),

    /// Amount parsing or arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Final running amount.
    pub result: MoneyAmount,
    /// Outcome of each `cmp`, in order.
    pub comparisons: Vec<Ordering>,
}

/// Renders a comparison outcome.
pub const fn describe(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

/// Evaluates `<amount> [<op> <operand>]...` from left to right.
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> Result<Evaluation, CalcError> {
    let mut tokens = tokens.iter().map(AsRef::as_ref);

    let mut running = MoneyAmount::parse(tokens.next().ok_or(CalcError::MissingAmount)?)?;
    let mut comparisons = Vec::new();

    while let Some(op) = tokens.next() {
        let operand = tokens
            .next()
            .ok_or_else(|| CalcError::MissingOperand(op.to_string()))?;

        running = match op {
            "+" => running.add(MoneyAmount::parse(operand)?)?,
            "-" => running.subtract(MoneyAmount::parse(operand)?)?,
            "x" | "*" => {
                let factor: i32 = operand
                    .parse()
                    .map_err(|_| CalcError::InvalidMultiplier(operand.to_string()))?;
                running.multiply(factor)?
            }
            "cmp" => {
                comparisons.push(running.cmp(&MoneyAmount::parse(operand)?));
                running
            }
            other => return Err(CalcError::UnknownOperator(other.to_string())),
        };
        debug!(op, operand, %running, "applied operator");
    }

    Ok(Evaluation {
        result: running,
        comparisons,
    })
}
