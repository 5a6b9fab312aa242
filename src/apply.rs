//! Applying predicates to values and collections
//!
//! [`filter`] keeps the accepted elements of a slice, [`partition`] splits a
//! slice into accepted and rejected elements, and [`ensure`] /
//! [`ensure_with`] turn a single rejected value into an error.
//!
//! None of these functions mutate their input. Relative order is preserved in
//! every output.

use crate::predicate::Predicate;

/// The result of splitting a collection with a predicate.
///
/// Every input element lands in exactly one of `valid` or `invalid`.
///
/// # Example
///
/// ```rust
/// use sluice::{partition, predicate::greater_than};
///
/// let split = partition(&[5, 15, 3], greater_than(10));
/// assert_eq!(split.valid, vec![15]);
/// assert_eq!(split.invalid, vec![5, 3]);
/// assert_eq!(split.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition<T> {
    /// Elements the predicate accepted.
    pub valid: Vec<T>,
    /// Elements the predicate rejected.
    pub invalid: Vec<T>,
}

impl<T> Partition<T> {
    /// Elements the predicate accepted.
    pub fn valid(&self) -> &[T] {
        &self.valid
    }

    /// Elements the predicate rejected.
    pub fn invalid(&self) -> &[T] {
        &self.invalid
    }

    /// Total number of elements on both sides.
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Whether the partitioned collection was empty.
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    /// Whether nothing was rejected. True for an empty partition.
    pub fn is_all_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Split into `(valid, invalid)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.valid, self.invalid)
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            valid: Vec::new(),
            invalid: Vec::new(),
        }
    }
}

/// Keep the elements of `items` that satisfy `predicate`, in order.
///
/// # Example
///
/// ```rust
/// use sluice::{filter, predicate::greater_than};
///
/// let numbers = [5, 15, 3, 20, 8, 12];
/// assert_eq!(filter(&numbers, greater_than(10)), vec![15, 20, 12]);
/// ```
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    let kept: Vec<T> = items
        .iter()
        .filter(|item| predicate.check(item))
        .cloned()
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        total = items.len(),
        valid = kept.len(),
        invalid = items.len() - kept.len(),
        "filtered items"
    );

    kept
}

/// Split `items` into the elements that satisfy `predicate` and those that
/// do not, in a single pass.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sluice::{partition, predicate::valid_email};
///
/// let emails = [json!("usuario@example.com"), json!("email_invalido"), json!(42)];
/// let split = partition(&emails, valid_email());
/// assert_eq!(split.valid, vec![json!("usuario@example.com")]);
/// assert_eq!(split.invalid, vec![json!("email_invalido"), json!(42)]);
/// ```
pub fn partition<T, P>(items: &[T], predicate: P) -> Partition<T>
where
    T: Clone,
    P: Predicate<T>,
{
    let mut split = Partition::default();
    for item in items {
        if predicate.check(item) {
            split.valid.push(item.clone());
        } else {
            split.invalid.push(item.clone());
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        total = items.len(),
        valid = split.valid.len(),
        invalid = split.invalid.len(),
        "partitioned items"
    );

    split
}

/// Accept a value if it satisfies the predicate.
///
/// Returns `Ok(value)` if the predicate is satisfied, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use sluice::{ensure, predicate::*};
///
/// assert_eq!(ensure(25, in_range(18, 65), "edad fuera de rango"), Ok(25));
/// assert_eq!(ensure(70, in_range(18, 65), "edad fuera de rango"), Err("edad fuera de rango"));
/// ```
pub fn ensure<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Accept a value if it satisfies the predicate, building the error lazily.
///
/// Like [`ensure`], but takes a closure so the error can mention the
/// rejected value.
///
/// # Example
///
/// ```rust
/// use sluice::{ensure_with, predicate::*};
///
/// let result = ensure_with(String::from("abc"), min_length(8), |s| {
///     format!("'{}' is too short (min 8 chars)", s)
/// });
/// assert_eq!(result, Err("'abc' is too short (min 8 chars)".to_string()));
/// ```
pub fn ensure_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::*;
    use serde_json::{json, Value};

    #[test]
    fn test_filter() {
        let numbers = [5, 15, 3, 20, 8, 12];
        assert_eq!(filter(&numbers, greater_than(10)), vec![15, 20, 12]);
    }

    #[test]
    fn test_filter_no_matches_and_empty_input() {
        assert!(filter(&[1, 2, 3], greater_than(10)).is_empty());
        assert!(filter(&[] as &[i32], greater_than(10)).is_empty());
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let numbers = vec![5, 15, 3];
        let kept = filter(&numbers, greater_than(10));
        assert_eq!(kept, vec![15]);
        assert_eq!(numbers, vec![5, 15, 3]);
    }

    #[test]
    fn test_filter_mixed_json() {
        let data = [json!(5), json!("15"), json!(null), json!(30.5), json!([20])];
        assert_eq!(
            filter(&data, greater_than(10)),
            vec![json!("15"), json!(30.5)]
        );
    }

    #[test]
    fn test_partition() {
        let split = partition(&[5, 15, 3], greater_than(10));
        assert_eq!(split.valid, vec![15]);
        assert_eq!(split.invalid, vec![5, 3]);
        assert!(!split.is_all_valid());
    }

    #[test]
    fn test_partition_matches_filter() {
        let data = [json!(1), json!(2), json!("x"), json!(4.0), json!(7)];
        let split = partition(&data, even());
        assert_eq!(split.valid, filter(&data, even()));
        assert_eq!(split.invalid, filter(&data, negate(even())));
        assert_eq!(split.len(), data.len());
    }

    #[test]
    fn test_partition_empty() {
        let split = partition(&[] as &[Value], not_blank());
        assert!(split.is_empty());
        assert!(split.is_all_valid());
        assert_eq!(split, Partition::default());
    }

    #[test]
    fn test_partition_into_parts() {
        let (valid, invalid) = partition(&["Ana", "", "Luis"], not_blank()).into_parts();
        assert_eq!(valid, vec!["Ana", "Luis"]);
        assert_eq!(invalid, vec![""]);
    }

    #[test]
    fn test_partition_accessors() {
        let split = partition(&[4, 7], even());
        assert_eq!(split.valid(), &[4]);
        assert_eq!(split.invalid(), &[7]);
    }

    #[test]
    fn test_ensure() {
        assert_eq!(ensure(42, positive(), "must be positive"), Ok(42));
        assert_eq!(ensure(-5, positive(), "must be positive"), Err("must be positive"));
    }

    #[test]
    fn test_ensure_with() {
        let result = ensure_with(json!({"edad": 30}), has_key("nombre"), |v| {
            format!("missing nombre in {}", v)
        });
        assert_eq!(
            result,
            Err("missing nombre in {\"edad\":30}".to_string())
        );

        let ok = ensure_with(String::from("hola"), not_blank(), |_| "blank");
        assert_eq!(ok, Ok(String::from("hola")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partition_serializes() {
        let split = partition(&[5, 15, 3], greater_than(10));
        assert_eq!(
            serde_json::to_value(&split).unwrap(),
            json!({"valid": [15], "invalid": [5, 3]})
        );
    }
}
