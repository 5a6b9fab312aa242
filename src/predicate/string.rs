//! String predicates
//!
//! This module provides common predicates for text validation. Non-textual
//! values are always rejected.

use super::combinators::Predicate;
use crate::coerce::Coerce;

/// Predicate that checks if a value is text with something besides whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl<T: Coerce + ?Sized> Predicate<T> for NotBlank {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.as_text().is_some_and(|s| !s.trim().is_empty())
    }
}

/// Create a predicate that checks if a value is non-empty text after trimming.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(not_blank().check("hola"));
/// assert!(!not_blank().check("   "));
/// assert!(!not_blank().check(&123));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate that checks if a value is text made only of letters.
#[derive(Clone, Copy, Default, Debug)]
pub struct OnlyLetters;

impl<T: Coerce + ?Sized> Predicate<T> for OnlyLetters {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value
            .as_text()
            .is_some_and(|s| !s.is_empty() && s.chars().all(char::is_alphabetic))
    }
}

/// Create a predicate that checks if a value is non-empty text whose every
/// character is alphabetic.
///
/// Digits, whitespace and punctuation are rejected. Letters outside ASCII
/// are accepted.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(only_letters().check("Hola"));
/// assert!(only_letters().check("Ñandú"));
/// assert!(!only_letters().check("Hola123"));
/// assert!(!only_letters().check(""));
/// ```
pub fn only_letters() -> OnlyLetters {
    OnlyLetters
}

/// Predicate that checks text length against a minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
}

impl<T: Coerce + ?Sized> Predicate<T> for MinLength {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value
            .as_text()
            .is_some_and(|s| s.chars().count() >= self.min)
    }
}

/// Create a predicate that checks if a value is text with at least `min`
/// characters.
///
/// Length counts characters, not bytes.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let password = min_length(8);
/// assert!(password.check("secreto123"));
/// assert!(!password.check("corta"));
/// assert!(!password.check(&12345678));
/// ```
pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}
