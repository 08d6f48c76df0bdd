//! Common value types.

pub mod money;

#[cfg(test)]
mod money_props;

pub use money::MoneyAmount;
