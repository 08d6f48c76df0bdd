//! Property-based tests for money amount operations.
//!
//! - Formatting and parsing round-trip
//! - Magnitude-only arithmetic
//! - Ordering and hashing consistency

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::money::MoneyAmount;

/// Strategy to generate amounts in the everyday range (00,00 to 99,99).
fn small_amount() -> impl Strategy<Value = MoneyAmount> {
    (0u32..100, 0u8..100).prop_map(|(whole, fraction)| MoneyAmount::new(whole, fraction).unwrap())
}

/// Strategy to generate any amount the parser accepts (up to 9,999,999.99).
fn parseable_amount() -> impl Strategy<Value = MoneyAmount> {
    (0u32..10_000_000, 0u8..100)
        .prop_map(|(whole, fraction)| MoneyAmount::new(whole, fraction).unwrap())
}

/// Strategy to generate non-zero multipliers of either sign.
fn multiplier() -> impl Strategy<Value = i32> {
    prop_oneof![1i32..1000, -1000i32..0]
}

fn std_hash(amount: &MoneyAmount) -> u64 {
    let mut hasher = DefaultHasher::new();
    amount.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn exhaustive_small_round_trip() {
    for whole in 0..100 {
        for fraction in 0..100 {
            let amount = MoneyAmount::new(whole, fraction).unwrap();
            assert_eq!(
                MoneyAmount::parse(&amount.to_string()).unwrap(),
                amount,
                "round-trip failed for {amount}"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Parsing the formatted string returns the original amount.
    #[test]
    fn prop_display_parse_round_trip(amount in parseable_amount()) {
        prop_assert_eq!(MoneyAmount::parse(&amount.to_string()).unwrap(), amount);
    }

    /// Addition is commutative.
    #[test]
    fn prop_add_commutative(a in parseable_amount(), b in parseable_amount()) {
        prop_assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
    }

    /// Subtraction yields the distance between the operands in either order.
    #[test]
    fn prop_subtract_is_distance(a in parseable_amount(), b in parseable_amount()) {
        let forward = a.subtract(b).unwrap();
        let backward = b.subtract(a).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward.subunits(), (a.subunits() - b.subunits()).abs());
    }

    /// Multiplication ignores the sign of the factor.
    #[test]
    fn prop_multiply_ignores_sign(amount in small_amount(), factor in multiplier()) {
        let product = amount.multiply(factor).unwrap();
        prop_assert_eq!(product, amount.multiply(-factor).unwrap());
        prop_assert_eq!(product.subunits(), amount.subunits() * i64::from(factor).abs());
    }

    /// Equal amounts produce equal hashes.
    #[test]
    fn prop_equal_implies_equal_hash(a in small_amount(), b in small_amount()) {
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
            prop_assert_eq!(std_hash(&a), std_hash(&b));
        }
        let copy = a;
        prop_assert_eq!(std_hash(&a), std_hash(&copy));
    }

    /// Ordering is antisymmetric and agrees with equality.
    #[test]
    fn prop_ordering_antisymmetric(a in small_amount(), b in small_amount()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.greater_than(&b), b.less_than(&a));
    }

    /// Ordering is transitive.
    #[test]
    fn prop_ordering_transitive(
        a in small_amount(),
        b in small_amount(),
        c in small_amount(),
    ) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    /// Ordering matches the cent totals.
    #[test]
    fn prop_ordering_matches_subunits(a in parseable_amount(), b in parseable_amount()) {
        prop_assert_eq!(a.cmp(&b), a.subunits().cmp(&b.subunits()));
    }
}
