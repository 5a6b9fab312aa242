//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing predicates.

use std::fmt;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let teenager = in_range(13, 19).and(even());
/// assert!(teenager.check(&14));
/// assert!(!teenager.check(&15));
/// assert!(!teenager.check("catorce"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// A type-erased predicate, used where predicates of different concrete
/// types share one collection.
pub type BoxedPredicate<T> = Box<dyn Predicate<T>>;

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// `and`, `or` and `not` return concrete types and never allocate.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let p = greater_than(0).and(greater_than(100).not());
/// assert!(p.check(&50));
/// assert!(!p.check(&150));
/// assert!(!p.check(&-5));
/// ```
pub trait PredicateExt: Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    /// The right-hand side is not evaluated when the left-hand side is false.
    fn and<P>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::predicate::*;
    ///
    /// let p = even().or(greater_than(10));
    /// assert!(p.check(&12));
    /// assert!(p.check(&11));
    /// assert!(!p.check(&9));
    /// ```
    fn or<P>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type so the predicate can join a mixed collection
    /// passed to [`all_of`], [`any_of`] or [`none_of`].
    fn boxed<T: ?Sized>(self) -> BoxedPredicate<T>
    where
        Self: Predicate<T> + 'static,
    {
        Box::new(self)
    }
}

// The value type is left to `check`: predicates such as `GreaterThan` accept
// many input types, so it cannot be fixed when chaining.
impl<P> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Invert a predicate.
///
/// Free-function form of [`PredicateExt::not`].
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let at_most_ten = negate(greater_than(10));
/// assert!(at_most_ten.check(&5));
/// assert!(!at_most_ten.check(&15));
/// ```
pub fn negate<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

macro_rules! predicate_list {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T: ?Sized> {
            predicates: Vec<BoxedPredicate<T>>,
        }

        impl<T: ?Sized> $name<T> {
            /// Append a predicate to the end of the list.
            pub fn with<P>(mut self, predicate: P) -> Self
            where
                P: Predicate<T> + 'static,
            {
                self.predicates.push(Box::new(predicate));
                self
            }

            /// Number of predicates in the list.
            pub fn len(&self) -> usize {
                self.predicates.len()
            }

            /// Whether the list holds no predicates.
            pub fn is_empty(&self) -> bool {
                self.predicates.is_empty()
            }
        }

        impl<T: ?Sized> FromIterator<BoxedPredicate<T>> for $name<T> {
            fn from_iter<I: IntoIterator<Item = BoxedPredicate<T>>>(iter: I) -> Self {
                Self {
                    predicates: iter.into_iter().collect(),
                }
            }
        }

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("len", &self.predicates.len())
                    .finish()
            }
        }
    };
}

predicate_list! {
    /// Conjunction over an ordered list of predicates.
    ///
    /// Evaluates left to right and stops at the first rejection.
    /// An empty list accepts every value.
    AllOf
}

predicate_list! {
    /// Disjunction over an ordered list of predicates.
    ///
    /// Evaluates left to right and stops at the first acceptance.
    /// An empty list rejects every value.
    AnyOf
}

predicate_list! {
    /// Accepts a value only when no predicate in the list accepts it.
    ///
    /// An empty list accepts every value.
    NoneOf
}

impl<T: ?Sized> Predicate<T> for AllOf<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.predicates.iter().all(|p| p.check(value))
    }
}

impl<T: ?Sized> Predicate<T> for AnyOf<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.predicates.iter().any(|p| p.check(value))
    }
}

impl<T: ?Sized> Predicate<T> for NoneOf<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.predicates.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// Predicates may have different concrete types; box them with
/// [`PredicateExt::boxed`]. For two or three predicates known at compile
/// time, `.and()` chaining avoids the allocation.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let big_and_even: AllOf<i32> = all_of([greater_than(10).boxed(), even().boxed()]);
/// assert!(big_and_even.check(&12));
/// assert!(!big_and_even.check(&15));
/// assert!(!big_and_even.check(&8));
///
/// let anything: AllOf<i32> = all_of([]);
/// assert!(anything.check(&0));
/// ```
pub fn all_of<T, I>(predicates: I) -> AllOf<T>
where
    T: ?Sized,
    I: IntoIterator<Item = BoxedPredicate<T>>,
{
    predicates.into_iter().collect()
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let even_or_big: AnyOf<i32> = any_of([even().boxed(), greater_than(10).boxed()]);
/// assert!(even_or_big.check(&12));
/// assert!(even_or_big.check(&11));
/// assert!(!even_or_big.check(&9));
///
/// let nothing: AnyOf<i32> = any_of([]);
/// assert!(!nothing.check(&0));
/// ```
pub fn any_of<T, I>(predicates: I) -> AnyOf<T>
where
    T: ?Sized,
    I: IntoIterator<Item = BoxedPredicate<T>>,
{
    predicates.into_iter().collect()
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// Equivalent to `negate(any_of(...))`.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let plain_word: NoneOf<str> = none_of([valid_email().boxed(), not_blank().not().boxed()]);
/// assert!(plain_word.check("hola"));
/// assert!(!plain_word.check("a@b.com"));
/// assert!(!plain_word.check("   "));
/// ```
pub fn none_of<T, I>(predicates: I) -> NoneOf<T>
where
    T: ?Sized,
    I: IntoIterator<Item = BoxedPredicate<T>>,
{
    predicates.into_iter().collect()
}
