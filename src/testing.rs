//! Testing utilities and helpers for Sluice
//!
//! This module provides assertion macros for predicates and partitions, and
//! (behind the `proptest` feature) strategies for property-based testing over
//! loosely typed values.
//!
//! # Examples
//!
//! ```rust
//! use sluice::predicate::*;
//! use sluice::{assert_accepts, assert_partition, assert_rejects, partition};
//!
//! assert_accepts!(in_range(10, 20), 10, 15, 20);
//! assert_rejects!(in_range(10, 20), 9, 21, "texto");
//!
//! assert_partition!(
//!     partition(&[5, 15, 3], greater_than(10)),
//!     valid: [15],
//!     invalid: [5, 3],
//! );
//! ```

use std::fmt::Debug;

/// Assert that a predicate accepts every listed value.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_accepts, predicate::even};
///
/// assert_accepts!(even(), 0, 2, -4);
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($predicate:expr, $($value:expr),+ $(,)?) => {{
        let predicate = &$predicate;
        $(
            let value = $value;
            if !$crate::predicate::Predicate::check(predicate, &value) {
                panic!("Expected predicate to accept {:?}", value);
            }
        )+
    }};
}

/// Assert that a predicate rejects every listed value.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_rejects, predicate::even};
///
/// assert_rejects!(even(), 1, "dos", 3.5);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $($value:expr),+ $(,)?) => {{
        let predicate = &$predicate;
        $(
            let value = $value;
            if $crate::predicate::Predicate::check(predicate, &value) {
                panic!("Expected predicate to reject {:?}", value);
            }
        )+
    }};
}

/// Assert the exact contents of both sides of a [`Partition`](crate::Partition).
///
/// # Example
///
/// ```rust
/// use sluice::{assert_partition, partition, predicate::even};
///
/// assert_partition!(partition(&[1, 2, 3], even()), valid: [2], invalid: [1, 3]);
/// ```
#[macro_export]
macro_rules! assert_partition {
    (
        $partition:expr,
        valid: [$($valid:expr),* $(,)?],
        invalid: [$($invalid:expr),* $(,)?] $(,)?
    ) => {{
        let partition = $partition;
        $crate::testing::assert_side("valid", &partition.valid, &[$($valid),*]);
        $crate::testing::assert_side("invalid", &partition.invalid, &[$($invalid),*]);
    }};
}

/// Compare one side of a partition with its expected contents.
///
/// Used by [`assert_partition!`]; ties both slices to one element type so an
/// empty expectation needs no annotation.
#[doc(hidden)]
#[track_caller]
pub fn assert_side<T: PartialEq + Debug>(side: &str, actual: &[T], expected: &[T]) {
    assert_eq!(actual, expected, "{side} side of partition differs");
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing arbitrary JSON values of every kind, nested up to three
/// levels deep.
///
/// # Example
///
/// ```rust,ignore
/// use proptest::prelude::*;
/// use sluice::predicate::*;
/// use sluice::testing::any_value;
///
/// proptest! {
///     #[test]
///     fn double_negation(value in any_value()) {
///         prop_assert_eq!(negate(negate(even())).check(&value), even().check(&value));
///     }
/// }
/// ```
#[cfg(feature = "proptest")]
pub fn any_value() -> BoxedStrategy<serde_json::Value> {
    use serde_json::Value;

    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6_f64..1.0e6).prop_map(Value::from),
        "[ a-zA-Z0-9@._-]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use crate::partition;
    use crate::predicate::*;
    use serde_json::json;

    #[test]
    fn accepts_macro_passes() {
        assert_accepts!(greater_than(10), 11, 15.5, "12", json!(100));
    }

    #[test]
    #[should_panic(expected = "Expected predicate to accept")]
    fn accepts_macro_panics_on_rejection() {
        assert_accepts!(greater_than(10), 11, 5);
    }

    #[test]
    fn rejects_macro_passes() {
        assert_rejects!(valid_email(), "correo_invalido", 123, json!(null));
    }

    #[test]
    #[should_panic(expected = "Expected predicate to reject")]
    fn rejects_macro_panics_on_acceptance() {
        assert_rejects!(valid_email(), "usuario@example.com");
    }

    #[test]
    fn partition_macro_with_empty_side() {
        assert_partition!(partition(&[12, 14], even()), valid: [12, 14], invalid: []);
    }

    #[test]
    #[should_panic(expected = "invalid side of partition differs")]
    fn partition_macro_panics_on_mismatch() {
        assert_partition!(partition(&[5, 15, 3], greater_than(10)), valid: [15], invalid: [3, 5]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::testing::any_value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_value_covers_partition_invariant(
                values in prop::collection::vec(any_value(), 0..12)
            ) {
                let split = partition(&values, not_blank());
                prop_assert_eq!(split.len(), values.len());
            }
        }
    }
}
