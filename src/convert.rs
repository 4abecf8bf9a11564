//! Conversions between plain values, [`Maybe`] and [`Outcome`].
//!
//! All conversions are total. Going from `Outcome` to `Maybe` drops the error;
//! going from `Maybe` to `Outcome` needs one supplied.
//!
//! [`Lift`] is implemented for every type, so any value can enter either
//! track:
//!
//! ```rust
//! use bearing::convert::Lift;
//! use bearing::{Error, Maybe, Outcome};
//!
//! assert_eq!(5_i32.to_maybe(), Maybe::Some(5));
//! assert_eq!(5_i32.to_maybe_if(|v| *v > 10), Maybe::None);
//! assert_eq!(5_i32.to_ok(), Outcome::Ok(5));
//! assert_eq!(
//!     5_i32.to_outcome_if(|v| *v > 10, Error::Unknown),
//!     Outcome::Error(Error::Unknown)
//! );
//! ```

use crate::error::Error;
use crate::exceptional::Exceptional;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

impl<T> Outcome<T> {
    /// `Ok(v)` becomes `Some(v)`; an error becomes `None` and is dropped.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Some(value),
            Outcome::Error(_) => Maybe::None,
        }
    }
}

impl<T> Maybe<T> {
    /// `Some(v)` becomes `Ok(v)`; `None` becomes `Error(error)`.
    ///
    /// ```rust
    /// use bearing::{Error, Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::some(1).to_outcome(Error::Unknown), Outcome::Ok(1));
    /// assert_eq!(
    ///     Maybe::<i32>::None.to_outcome(Error::null_reference(Some("id"))),
    ///     Outcome::Error(Error::null_reference(Some("id")))
    /// );
    /// ```
    #[inline]
    pub fn to_outcome(self, error: Error) -> Outcome<T> {
        self.to_outcome_with(|| error)
    }

    /// Like [`to_outcome`](Maybe::to_outcome), building the error only when
    /// needed.
    #[inline]
    pub fn to_outcome_with<F>(self, error_f: F) -> Outcome<T>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => Outcome::Error(error_f()),
        }
    }
}

/// Lift any value into [`Maybe`], [`Outcome`] or [`Exceptional`].
///
/// Blanket-implemented for every sized type.
pub trait Lift: Sized {
    /// Always `Some(self)`.
    #[inline]
    fn to_maybe(self) -> Maybe<Self> {
        Maybe::Some(self)
    }

    /// `Some(self)` when the predicate holds, `None` otherwise.
    #[inline]
    fn to_maybe_if<P>(self, predicate: P) -> Maybe<Self>
    where
        P: FnOnce(&Self) -> bool,
    {
        if predicate(&self) {
            Maybe::Some(self)
        } else {
            Maybe::None
        }
    }

    /// Always `Ok(self)`.
    #[inline]
    fn to_ok(self) -> Outcome<Self> {
        Outcome::Ok(self)
    }

    /// `Ok(self)` when the predicate holds, `Error(error)` otherwise.
    #[inline]
    fn to_outcome_if<P>(self, predicate: P, error: Error) -> Outcome<Self>
    where
        P: FnOnce(&Self) -> bool,
    {
        self.to_outcome_if_else(predicate, |_| error)
    }

    /// `Ok(self)` when the predicate holds, otherwise an error derived from
    /// the rejected value.
    ///
    /// ```rust
    /// use bearing::convert::Lift;
    /// use bearing::{Error, Outcome};
    ///
    /// let checked = (-3_i32).to_outcome_if_else(|v| *v >= 0, |v| Error::value(format!("{} < 0", v)));
    /// assert_eq!(checked, Outcome::Error(Error::value("-3 < 0".to_string())));
    /// ```
    #[inline]
    fn to_outcome_if_else<P, F>(self, predicate: P, error_f: F) -> Outcome<Self>
    where
        P: FnOnce(&Self) -> bool,
        F: FnOnce(&Self) -> Error,
    {
        if predicate(&self) {
            Outcome::Ok(self)
        } else {
            Outcome::Error(error_f(&self))
        }
    }

    /// `Ok(self)` when the predicate holds, `Error(Error::Unknown)` otherwise.
    #[inline]
    fn to_outcome_if_default<P>(self, predicate: P) -> Outcome<Self>
    where
        P: FnOnce(&Self) -> bool,
    {
        self.to_outcome_if(predicate, Error::Unknown)
    }

    /// `Ok(self)` when `flag` is set, `Error(error)` otherwise.
    #[inline]
    fn to_outcome_when(self, flag: bool, error: Error) -> Outcome<Self> {
        if flag {
            Outcome::Ok(self)
        } else {
            Outcome::Error(error)
        }
    }

    /// Always `Success(self)`.
    #[inline]
    fn to_exceptional_success(self) -> Exceptional<Self> {
        Exceptional::Success(self)
    }
}

impl<T> Lift for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_round_trips() {
        assert_eq!(7_i32.to_maybe().to_outcome(Error::Unknown), Outcome::Ok(7));
        assert_eq!(
            Maybe::<i32>::None.to_outcome(Error::value("e")),
            Outcome::Error(Error::value("e"))
        );
        assert_eq!(Outcome::ok(7).to_maybe(), Maybe::Some(7));
        assert_eq!(Outcome::<i32>::error(Error::Unknown).to_maybe(), Maybe::None);
    }

    #[test]
    fn test_to_outcome_with_is_lazy() {
        let calls = Cell::new(0);
        let outcome = Maybe::some(1).to_outcome_with(|| {
            calls.set(calls.get() + 1);
            Error::Unknown
        });
        assert_eq!(outcome, Outcome::Ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_scenario_to_maybe_then_map() {
        assert_eq!(
            1234_i32.to_maybe().map(|x| x.to_string()),
            Maybe::Some("1234".to_string())
        );
    }

    #[test]
    fn test_conditional_lifts() {
        assert_eq!("ok".to_maybe_if(|s| !s.is_empty()), Maybe::Some("ok"));
        assert_eq!("".to_maybe_if(|s| !s.is_empty()), Maybe::None);
        assert_eq!(
            0_i32.to_outcome_if_default(|v| *v > 0),
            Outcome::Error(Error::Unknown)
        );
        assert_eq!(
            1_i32.to_outcome_when(false, Error::value("off")),
            Outcome::Error(Error::value("off"))
        );
        assert_eq!(1_i32.to_outcome_when(true, Error::value("off")), Outcome::Ok(1));
    }

    #[test]
    fn test_to_exceptional_success() {
        assert!(matches!(2_i32.to_exceptional_success(), Exceptional::Success(2)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_lifted_value_round_trips(v: i64) {
            prop_assert_eq!(v.to_maybe().to_outcome(Error::Unknown), Outcome::Ok(v));
            prop_assert_eq!(v.to_ok().to_maybe(), Maybe::Some(v));
        }

        #[test]
        fn prop_to_outcome_if_agrees_with_to_maybe_if(v: i32) {
            let p = |x: &i32| x % 2 == 0;
            prop_assert_eq!(
                v.to_outcome_if(p, Error::Unknown).to_maybe(),
                v.to_maybe_if(p)
            );
        }
    }
}
