//! A success value or a caught [`Exception`].
//!
//! `Exceptional<T>` is the value-level record of a guarded call: either it
//! returned, or it raised an exception the call site declared it would catch.
//! [`try_catch`] builds one from a fallible closure and a [`Catch`] list.
//!
//! # Example
//!
//! ```rust
//! use bearing::exception::{Catch, Exception};
//! use bearing::exceptional::{try_catch, Exceptional};
//! use std::num::ParseIntError;
//!
//! let catch = Catch::new().on::<ParseIntError>();
//! let parse = |s: &str| -> Result<i32, Exception> { Ok(s.parse::<i32>()?) };
//!
//! let parsed = try_catch("12", parse, &catch).unwrap();
//! assert_eq!(parsed, Exceptional::Success(12));
//!
//! let failed = try_catch("twelve", parse, &catch).unwrap();
//! assert!(failed.is_failure());
//! ```

use crate::error::Error;
use crate::exception::{Catch, DefaultConstructed, Exception};
use crate::outcome::Outcome;

/// A success value or a caught exception.
#[derive(Clone, Debug)]
pub enum Exceptional<T> {
    /// The call returned a value
    Success(T),
    /// The call raised a caught exception
    Failure(Exception),
}

impl<T> Exceptional<T> {
    /// Lift a success value.
    #[inline]
    pub fn success(value: T) -> Self {
        Exceptional::Success(value)
    }

    /// Lift a caught exception.
    #[inline]
    pub fn failure(exception: Exception) -> Self {
        Exceptional::Failure(exception)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Exceptional::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Split into the success flag, the value and the exception.
    #[inline]
    pub fn deconstruct(self) -> (bool, Option<T>, Option<Exception>) {
        match self {
            Exceptional::Success(value) => (true, Some(value), None),
            Exceptional::Failure(exception) => (false, None, Some(exception)),
        }
    }

    /// Run exactly one of the two actions, returning `self` unchanged.
    ///
    /// ```rust
    /// use bearing::exception::Exception;
    /// use bearing::Exceptional;
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let failed = Exceptional::<i32>::failure(Exception::msg("disk full")).tap(
    ///     |v| log.borrow_mut().push(v.to_string()),
    ///     |e| log.borrow_mut().push(e.to_string()),
    /// );
    /// assert!(failed.is_failure());
    /// assert_eq!(log.into_inner(), vec!["disk full".to_string()]);
    /// ```
    #[inline]
    pub fn tap<F, G>(self, success_action: F, exception_action: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&Exception),
    {
        match &self {
            Exceptional::Success(value) => success_action(value),
            Exceptional::Failure(exception) => exception_action(exception),
        }
        self
    }

    /// Transform the success value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Exceptional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Exceptional::Success(value) => Exceptional::Success(f(value)),
            Exceptional::Failure(exception) => Exceptional::Failure(exception),
        }
    }

    /// Convert into a std `Result`, re-raising the exception as `Err`.
    #[inline]
    pub fn into_result(self) -> Result<T, Exception> {
        match self {
            Exceptional::Success(value) => Ok(value),
            Exceptional::Failure(exception) => Err(exception),
        }
    }

    /// Move onto the `Outcome` track; a failure becomes
    /// [`Error::Exception`].
    #[inline]
    pub fn to_outcome(self) -> Outcome<T> {
        match self {
            Exceptional::Success(value) => Outcome::Ok(value),
            Exceptional::Failure(exception) => Outcome::Error(Error::exception(exception)),
        }
    }
}

impl<T> Default for Exceptional<T> {
    /// A failure carrying the [`DefaultConstructed`] sentinel.
    fn default() -> Self {
        Exceptional::Failure(Exception::new(DefaultConstructed))
    }
}

impl<T> From<Exception> for Exceptional<T> {
    fn from(exception: Exception) -> Self {
        Exceptional::Failure(exception)
    }
}

impl<T: PartialEq> PartialEq for Exceptional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Exceptional::Success(a), Exceptional::Success(b)) => a == b,
            (Exceptional::Failure(a), Exceptional::Failure(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Exception {
    /// Lift this exception into a failed [`Exceptional`].
    #[inline]
    pub fn to_exceptional_failure<T>(self) -> Exceptional<T> {
        Exceptional::Failure(self)
    }

    /// Lift this exception into an [`Error::Exception`].
    #[inline]
    pub fn to_exception_error(self) -> Error {
        Error::exception(self)
    }
}

/// Run `f` on `value`, turning a listed exception into a `Failure`.
///
/// An exception whose type is in `catch` becomes
/// `Ok(Exceptional::Failure(..))`. Any other exception, and every critical
/// exception, is returned as `Err` so the caller keeps propagating it. Panics
/// are not intercepted.
pub fn try_catch<T, U, F>(value: T, f: F, catch: &Catch) -> Result<Exceptional<U>, Exception>
where
    F: FnOnce(T) -> Result<U, Exception>,
{
    match f(value) {
        Ok(output) => Ok(Exceptional::Success(output)),
        Err(exception) if catch.matches(&exception) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(exception = %exception, "caught exception");
            Ok(Exceptional::Failure(exception))
        }
        Err(exception) => {
            #[cfg(feature = "tracing")]
            if exception.is_critical() {
                tracing::warn!(exception = %exception, "re-raising critical exception");
            }
            Err(exception)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Lift;
    use crate::exception::CriticalError;
    use std::cell::Cell;
    use std::io;
    use std::num::ParseIntError;

    fn parse(s: &str) -> Result<i32, Exception> {
        Ok(s.parse::<i32>()?)
    }

    #[test]
    fn test_default_is_sentinel_failure() {
        let (is_success, value, exception) = Exceptional::<i32>::default().deconstruct();
        assert!(!is_success);
        assert_eq!(value, None);
        let exception = exception.map(|e| e.to_string());
        assert_eq!(exception.as_deref(), Some("Default constructor called."));
    }

    #[test]
    fn test_lifts() {
        assert_eq!(5_i32.to_exceptional_success(), Exceptional::Success(5));
        let exception = Exception::msg("boom");
        let failed: Exceptional<i32> = exception.clone().into();
        assert_eq!(failed, exception.clone().to_exceptional_failure());
        assert_ne!(failed, Exceptional::failure(Exception::msg("boom")));
        assert_eq!(
            exception.clone().to_exception_error(),
            Error::exception(exception)
        );
    }

    #[test]
    fn test_tap_runs_exactly_one_action() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);
        let _ = Exceptional::success(1).tap(
            |_| successes.set(successes.get() + 1),
            |_| failures.set(failures.get() + 1),
        );
        let _ = Exceptional::<i32>::default().tap(
            |_| successes.set(successes.get() + 1),
            |_| failures.set(failures.get() + 1),
        );
        assert_eq!((successes.get(), failures.get()), (1, 1));
    }

    #[test]
    fn test_try_catch_success() {
        let catch = Catch::new().on::<ParseIntError>();
        assert!(matches!(
            try_catch("42", parse, &catch),
            Ok(Exceptional::Success(42))
        ));
    }

    #[test]
    fn test_try_catch_listed_exception_becomes_failure() {
        let catch = Catch::new().on::<io::Error>().on::<ParseIntError>();
        match try_catch("x", parse, &catch) {
            Ok(Exceptional::Failure(exception)) => assert!(exception.is::<ParseIntError>()),
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_try_catch_unlisted_exception_propagates() {
        let catch = Catch::new().on::<io::Error>();
        let raised = try_catch("x", parse, &catch);
        assert!(raised.is_err_and(|e| e.is::<ParseIntError>()));
    }

    #[test]
    fn test_try_catch_critical_always_propagates() {
        let catch = Catch::new().on::<CriticalError>();
        let raised = try_catch((), |_| Err::<i32, _>(Exception::critical("oom")), &catch);
        assert!(raised.is_err_and(|e| e.is_critical()));
    }

    #[test]
    fn test_to_outcome() {
        let exception = Exception::msg("boom");
        assert_eq!(Exceptional::success(1).to_outcome(), Outcome::Ok(1));
        assert_eq!(
            Exceptional::<i32>::failure(exception.clone()).to_outcome(),
            Outcome::Error(Error::exception(exception))
        );
    }
}
