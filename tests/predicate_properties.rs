//! Property-based tests for predicate combinators and partitioning

use proptest::prelude::*;
use serde_json::Value;
use sluice::predicate::*;
use sluice::{filter, partition};

fn json_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::from),
        (-1000.0f64..1000.0).prop_map(Value::from),
        "[ a-z0-9@.]{0,12}".prop_map(Value::String),
        prop::collection::vec(any::<i32>().prop_map(Value::from), 0..3).prop_map(Value::Array),
    ]
}

fn sample_predicates() -> Vec<BoxedPredicate<Value>> {
    vec![
        greater_than(10).boxed(),
        positive().boxed(),
        even().boxed(),
        in_range(-50, 50).boxed(),
        not_blank().boxed(),
        only_letters().boxed(),
        min_length(4).boxed(),
        non_empty_list().boxed(),
        valid_email().boxed(),
        corporate_email().boxed(),
    ]
}

proptest! {
    #[test]
    fn prop_filter_and_negation_cover_input(
        values in prop::collection::vec(json_value(), 0..40),
        threshold in -100i32..100
    ) {
        let kept = filter(&values, greater_than(threshold));
        let dropped = filter(&values, negate(greater_than(threshold)));
        prop_assert_eq!(kept.len() + dropped.len(), values.len());
    }

    #[test]
    fn prop_partition_agrees_with_filter(
        values in prop::collection::vec(json_value(), 0..40),
        min in -100i32..0,
        max in 0i32..100
    ) {
        let split = partition(&values, in_range(min, max));
        prop_assert_eq!(&split.valid, &filter(&values, in_range(min, max)));
        prop_assert_eq!(&split.invalid, &filter(&values, negate(in_range(min, max))));
        prop_assert_eq!(split.len(), values.len());
    }

    #[test]
    fn prop_partition_preserves_order(values in prop::collection::vec(-500i64..500, 0..40)) {
        let split = partition(&values, even());
        let mut valid = split.valid.iter().peekable();
        let mut invalid = split.invalid.iter().peekable();
        for value in &values {
            let next = if value % 2 == 0 { valid.next() } else { invalid.next() };
            prop_assert_eq!(next, Some(value));
        }
        prop_assert!(valid.peek().is_none());
        prop_assert!(invalid.peek().is_none());
    }

    #[test]
    fn prop_all_of_is_conjunction(value in json_value()) {
        let expected = sample_predicates().iter().all(|p| p.check(&value));
        let combined: AllOf<Value> = all_of(sample_predicates());
        prop_assert_eq!(combined.check(&value), expected);
    }

    #[test]
    fn prop_any_of_is_disjunction(value in json_value()) {
        let expected = sample_predicates().iter().any(|p| p.check(&value));
        let combined: AnyOf<Value> = any_of(sample_predicates());
        prop_assert_eq!(combined.check(&value), expected);
    }

    #[test]
    fn prop_none_of_negates_any_of(value in json_value()) {
        let none: NoneOf<Value> = none_of(sample_predicates());
        let any: AnyOf<Value> = any_of(sample_predicates());
        prop_assert_eq!(none.check(&value), !any.check(&value));
    }

    #[test]
    fn prop_double_negation(value in json_value()) {
        for predicate in sample_predicates() {
            let original = |v: &Value| predicate.check(v);
            prop_assert_eq!(negate(negate(original)).check(&value), original.check(&value));
        }
    }

    #[test]
    fn prop_and_chain_matches_all_of(value in -1000i64..1000) {
        let chained = greater_than(10).and(even());
        let listed: AllOf<i64> = all_of([greater_than(10).boxed(), even().boxed()]);
        prop_assert_eq!(chained.check(&value), listed.check(&value));
        prop_assert_eq!(chained.check(&value), value > 10 && value % 2 == 0);
    }

    #[test]
    fn prop_predicates_never_panic(value in json_value()) {
        for predicate in sample_predicates() {
            let _ = predicate.check(&value);
        }
    }

    #[test]
    fn prop_numeric_text_matches_number(n in -10_000i64..10_000) {
        let as_text = n.to_string();
        prop_assert_eq!(greater_than(10).check(as_text.as_str()), greater_than(10).check(&n));
        prop_assert_eq!(even().check(as_text.as_str()), even().check(&n));
        prop_assert_eq!(in_range(-20, 20).check(as_text.as_str()), in_range(-20, 20).check(&n));
    }
}
