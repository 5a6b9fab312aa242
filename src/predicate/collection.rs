//! Collection predicates
//!
//! This module provides predicates over sequences and mappings.

use super::combinators::Predicate;
use crate::coerce::Coerce;

/// Predicate that checks if a value is a sequence with at least one element.
#[derive(Clone, Copy, Default, Debug)]
pub struct NonEmptyList;

impl<T: Coerce + ?Sized> Predicate<T> for NonEmptyList {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.seq_len().is_some_and(|len| len > 0)
    }
}

/// Create a predicate that checks if a value is a non-empty sequence.
///
/// Text is not a sequence here, so `"abc"` is rejected.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sluice::predicate::*;
///
/// assert!(non_empty_list().check(&vec![1, 2]));
/// assert!(!non_empty_list().check(&Vec::<i32>::new()));
/// assert!(!non_empty_list().check(&json!("no_lista")));
/// ```
pub fn non_empty_list() -> NonEmptyList {
    NonEmptyList
}

/// Predicate that checks if a mapping contains a key.
#[derive(Clone, Debug)]
pub struct HasKey<K>(pub K);

impl<T, K> Predicate<T> for HasKey<K>
where
    T: Coerce + ?Sized,
    K: AsRef<str> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.contains_key(self.0.as_ref())
    }
}

/// Create a predicate that checks if a value is a mapping containing `key`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use sluice::predicate::*;
///
/// let p = has_key("nombre");
/// assert!(p.check(&json!({"nombre": "Juan"})));
/// assert!(!p.check(&json!({"edad": 30})));
/// assert!(!p.check(&json!("no_diccionario")));
/// ```
pub fn has_key<K: AsRef<str> + Send + Sync>(key: K) -> HasKey<K> {
    HasKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_non_empty_list() {
        assert!(non_empty_list().check(&vec![1, 2]));
        assert!(!non_empty_list().check(&Vec::<i32>::new()));
        assert!(!non_empty_list().check("no_lista"));
        assert!(non_empty_list().check(&json!([null])));
        assert!(!non_empty_list().check(&json!([])));
        assert!(!non_empty_list().check(&json!({"a": 1})));
    }

    #[test]
    fn test_non_empty_slice() {
        let items = [1, 2, 3];
        assert!(non_empty_list().check(&items[..]));
        assert!(!non_empty_list().check(&items[..0]));
    }

    #[test]
    fn test_has_key_json() {
        let p = has_key("nombre");
        assert!(p.check(&json!({"nombre": "Juan"})));
        assert!(!p.check(&json!({"edad": 30})));
        assert!(!p.check(&json!("no_diccionario")));
        assert!(!p.check(&json!(["nombre"])));
    }

    #[test]
    fn test_has_key_maps() {
        let mut hash = HashMap::new();
        hash.insert("email".to_string(), "juan@example.com");
        let mut tree = BTreeMap::new();
        tree.insert("edad".to_string(), 30);

        let p = has_key(String::from("email"));
        assert!(p.check(&hash));
        assert!(!p.check(&tree));
    }

    #[test]
    fn test_record_shape() {
        let user = has_key("nombre").and(has_key("email"));
        assert!(user.check(&json!({"nombre": "Ana", "email": "ana@empresa.com"})));
        assert!(!user.check(&json!({"nombre": "Ana"})));
    }
}
