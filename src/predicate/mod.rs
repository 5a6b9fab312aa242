//! Predicate combinators for composable validation logic
//!
//! This module provides composable predicates over loosely typed values.
//! Predicates can be combined using logical operators (`and`, `or`, `not`)
//! or collected into `all_of` / `any_of` / `none_of` lists to build complex
//! rules from simple, reusable pieces.
//!
//! # Philosophy
//!
//! A predicate never fails. A value of the wrong shape (text where a number
//! was expected, a list where a mapping was expected) is simply rejected, so
//! predicates can be run over heterogeneous data read from JSON without any
//! error plumbing.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use sluice::predicate::*;
//!
//! let adult_age = in_range(18, 120);
//! let username = not_blank().and(only_letters()).and(min_length(3));
//!
//! assert!(adult_age.check(&json!(30)));
//! assert!(adult_age.check(&json!("30")));
//! assert!(!adult_age.check(&json!("treinta")));
//! assert!(username.check("lucia"));
//! assert!(!username.check("lu"));
//! ```
//!
//! # Mixed predicate lists
//!
//! ```rust
//! use sluice::predicate::*;
//!
//! let rules: AllOf<i64> = all_of([greater_than(10).boxed(), even().boxed()]);
//! assert!(rules.check(&12));
//! assert!(!rules.check(&15));
//! ```

mod collection;
mod combinators;
mod email;
mod number;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{BoxedPredicate, Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, negate, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

// Re-export number predicates
pub use number::{even, greater_than, in_range, positive, Even, GreaterThan, InRange, Threshold};

// Re-export string predicates
pub use string::{min_length, not_blank, only_letters, MinLength, NotBlank, OnlyLetters};

// Re-export collection predicates
pub use collection::{has_key, non_empty_list, HasKey, NonEmptyList};

// Re-export email predicates
pub use email::{
    corporate_email, corporate_email_with, is_email, valid_email, CorporateEmail, EmailPolicy,
    ValidEmail, PUBLIC_DOMAINS,
};
