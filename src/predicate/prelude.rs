//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use sluice::predicate::prelude::*;
//!
//! let valid_age = in_range(0, 150).and(even().not());
//! assert!(valid_age.check(&25));
//! assert_eq!(filter(&[25, 26, 200], valid_age), vec![25]);
//! ```

// Core trait
pub use super::combinators::{BoxedPredicate, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, negate, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

// Number predicates
pub use super::number::{even, greater_than, in_range, positive};

// String predicates
pub use super::string::{min_length, not_blank, only_letters};

// Collection predicates
pub use super::collection::{has_key, non_empty_list};

// Email predicates
pub use super::email::{corporate_email, corporate_email_with, valid_email, EmailPolicy};

// Applying predicates
pub use crate::apply::{ensure, ensure_with, filter, partition, Partition};
