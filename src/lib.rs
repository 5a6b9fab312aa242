//! # Sluice
//!
//! > *"Let the good water through"*
//!
//! A Rust library of composable predicates for filtering and partitioning
//! loosely typed data.
//!
//! ## Philosophy
//!
//! - **Predicates never fail.** A value of the wrong shape is rejected, not
//!   reported as an error, so rules run safely over data read from JSON.
//! - **Factories capture configuration.** `in_range(18, 65)` or
//!   `min_length(8)` return small values that can be reused and shared
//!   between threads.
//! - **Combinators compose.** `and`, `or`, `not`, `all_of`, `any_of` and
//!   `none_of` build larger rules out of smaller ones.
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use sluice::predicate::*;
//! use sluice::{filter, partition};
//!
//! let numbers = [5, 15, 3, 20, 8, 12];
//! assert_eq!(filter(&numbers, greater_than(10)), vec![15, 20, 12]);
//!
//! let contacts = [
//!     json!("empleado@empresa.com"),
//!     json!("usuario@gmail.com"),
//!     json!("correo_invalido"),
//! ];
//! let split = partition(&contacts, corporate_email());
//! assert_eq!(split.valid, vec![json!("empleado@empresa.com")]);
//! assert_eq!(split.invalid.len(), 2);
//! ```
//!
//! ## Cargo features
//!
//! - `serde`: serialize [`Partition`] and load [`predicate::EmailPolicy`] from configuration.
//! - `tracing`: emit `debug` events from [`filter`] and [`partition`].
//! - `proptest`: strategies in [`testing`] for property-based tests.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod apply;
pub mod coerce;
pub mod predicate;
pub mod testing;

// Re-exports
pub use apply::{ensure, ensure_with, filter, partition, Partition};
pub use coerce::{Coerce, CoercionError, Kind};
pub use predicate::{Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::apply::{ensure, ensure_with, filter, partition, Partition};
    pub use crate::coerce::{Coerce, CoercionError, Kind};
    pub use crate::predicate::prelude::*;
}
