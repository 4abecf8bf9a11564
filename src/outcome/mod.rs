//! A success value or a domain [`Error`].
//!
//! `Outcome<T>` is `Ok(T)` or `Error(Error)`. Unlike `std::result::Result`, the
//! failure channel is fixed to the crate's [`Error`] taxonomy, so outcomes
//! from unrelated call sites compose without error-type conversion.
//!
//! The default outcome is `Error(Error::Unknown)`: an outcome is never
//! silently successful.
//!
//! # Examples
//!
//! ```rust
//! use bearing::{Error, Outcome};
//!
//! fn parse_age(input: &str) -> Outcome<u8> {
//!     match input.trim().parse::<u8>() {
//!         Ok(age) => Outcome::ok(age),
//!         Err(_) => Outcome::error(Error::invalid_format(Some("age"))),
//!     }
//! }
//!
//! let adult = parse_age(" 42 ")
//!     .check(|age| *age >= 18, Error::validation("must be an adult", Some("age")))
//!     .map(|age| format!("{} years", age));
//! assert_eq!(adult, Outcome::Ok("42 years".to_string()));
//!
//! let (is_ok, value, error) = parse_age("x").deconstruct();
//! assert!(!is_ok);
//! assert_eq!(value, None);
//! assert_eq!(error, Some(Error::invalid_format(Some("age"))));
//! ```

pub mod future;

use std::any::Any;
use std::fmt;

use crate::error::Error;
use crate::exception::Exception;

/// A success value or a domain error.
///
/// # Example
///
/// ```rust
/// use bearing::{Error, Outcome};
///
/// let ok: Outcome<i32> = Outcome::ok(1);
/// let failed: Outcome<i32> = Outcome::error(Error::Unknown);
///
/// assert!(ok.is_ok());
/// assert!(failed.is_error());
/// assert_eq!(Outcome::<i32>::default(), failed);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// A success value
    Ok(T),
    /// A domain error
    Error(Error),
}

impl<T> Outcome<T> {
    // ========== Constructors ==========

    /// Lift a success value.
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Lift an error.
    #[inline]
    pub fn error(error: Error) -> Self {
        Outcome::Error(error)
    }

    /// An outcome carrying [`Error::Unknown`].
    #[inline]
    pub fn unknown_error() -> Self {
        Outcome::Error(Error::Unknown)
    }

    // ========== Predicates ==========

    /// Returns `true` for `Ok`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` for `Error`.
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    // ========== Extractors ==========

    /// Split into the success flag, the value and the error.
    ///
    /// Exactly one of the two payloads is present.
    #[inline]
    pub fn deconstruct(self) -> (bool, Option<T>, Option<Error>) {
        match self {
            Outcome::Ok(value) => (true, Some(value), None),
            Outcome::Error(error) => (false, None, Some(error)),
        }
    }

    /// Convert to `Outcome<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(error) => Outcome::Error(error.clone()),
        }
    }

    /// Convert into a std `Result`, ready for `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }

    /// Borrow the success value, if any.
    #[inline]
    pub fn ok_value(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    /// Borrow the error, if any.
    #[inline]
    pub fn error_value(&self) -> Option<&Error> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }

    /// Non-panicking extraction of the value into an output slot.
    ///
    /// Writes `T::default()` on `Error`. Returns `is_ok()`.
    pub fn try_ok(&self, value: &mut T) -> bool
    where
        T: Clone + Default,
    {
        match self {
            Outcome::Ok(v) => {
                *value = v.clone();
                true
            }
            Outcome::Error(_) => {
                *value = T::default();
                false
            }
        }
    }

    /// Non-panicking extraction of the error into an output slot.
    ///
    /// Writes [`Error::Unknown`] on `Ok`. Returns `is_error()`.
    pub fn try_error(&self, error: &mut Error) -> bool {
        match self {
            Outcome::Ok(_) => {
                *error = Error::Unknown;
                false
            }
            Outcome::Error(e) => {
                *error = e.clone();
                true
            }
        }
    }

    // ========== Transformations ==========

    /// Transform the success value. The error, if any, passes through
    /// unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Chain a fallible computation.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Chain either branch: `f` on `Ok`, `error_f` on `Error`.
    ///
    /// ```rust
    /// use bearing::{Error, Outcome};
    ///
    /// let recovered = Outcome::<i32>::error(Error::Unknown)
    ///     .bind_or(|v| Outcome::ok(v + 1), |_| Outcome::ok(0));
    /// assert_eq!(recovered, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn bind_or<U, F, G>(self, f: F, error_f: G) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
        G: FnOnce(Error) -> Outcome<U>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Error(error) => error_f(error),
        }
    }

    /// Re-derive the outcome from its error; `Ok` passes through.
    ///
    /// The delegate may recover (`Ok`) or replace the error.
    ///
    /// ```rust
    /// use bearing::{Error, Outcome};
    ///
    /// let relabelled = Outcome::<i32>::error(Error::Unknown)
    ///     .map_error(|_| Outcome::error(Error::null_reference(Some("user"))));
    /// assert_eq!(relabelled, Outcome::Error(Error::null_reference(Some("user"))));
    /// ```
    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(error) => f(error),
        }
    }

    /// Chain only when the predicate holds on the value; otherwise `self`
    /// is returned unchanged.
    ///
    /// ```rust
    /// use bearing::Outcome;
    ///
    /// let clamp = |_: i32| Outcome::ok(100);
    /// assert_eq!(Outcome::ok(250).bind_if(|v| *v > 100, clamp), Outcome::Ok(100));
    /// assert_eq!(Outcome::ok(50).bind_if(|v| *v > 100, clamp), Outcome::Ok(50));
    /// ```
    #[inline]
    pub fn bind_if<P, F>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<T>,
    {
        match self {
            Outcome::Ok(value) => {
                if predicate(&value) {
                    f(value)
                } else {
                    Outcome::Ok(value)
                }
            }
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Chain `true_f` when the predicate holds, `false_f` otherwise. An
    /// `Error` passes through untouched.
    #[inline]
    pub fn bind_if_else<U, P, F, G>(self, predicate: P, true_f: F, false_f: G) -> Outcome<U>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<U>,
        G: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Ok(value) => {
                if predicate(&value) {
                    true_f(value)
                } else {
                    false_f(value)
                }
            }
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Keep `Ok` only when the predicate holds; otherwise fail with `error`.
    #[inline]
    pub fn check<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.check_with(predicate, || error)
    }

    /// Like [`check`](Outcome::check) with a lazily built error.
    #[inline]
    pub fn check_with<P, F>(self, predicate: P, error_f: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> Error,
    {
        self.bind(|value| {
            if predicate(&value) {
                Outcome::Ok(value)
            } else {
                Outcome::Error(error_f())
            }
        })
    }

    /// Keep `Ok` only when the predicate fails; otherwise fail with `error`.
    #[inline]
    pub fn check_not<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.check_not_with(predicate, || error)
    }

    /// Like [`check_not`](Outcome::check_not) with a lazily built error.
    #[inline]
    pub fn check_not_with<P, F>(self, predicate: P, error_f: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> Error,
    {
        self.bind(|value| {
            if predicate(&value) {
                Outcome::Error(error_f())
            } else {
                Outcome::Ok(value)
            }
        })
    }

    // ========== Matching ==========

    /// Collapse to a plain value; exactly one branch runs.
    #[inline]
    pub fn match_with<U, F, G>(self, ok_f: F, error_f: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> U,
    {
        match self {
            Outcome::Ok(value) => ok_f(value),
            Outcome::Error(error) => error_f(error),
        }
    }

    /// The value, or `error_value` on `Error`.
    #[inline]
    pub fn value_or(self, error_value: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(_) => error_value,
        }
    }

    /// The value, or one derived from the error.
    #[inline]
    pub fn value_or_else<F>(self, error_f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(error) => error_f(error),
        }
    }

    /// The value, or raise the failure derived from the error.
    ///
    /// ```rust
    /// use bearing::{Error, Outcome};
    ///
    /// fn load() -> Result<i32, String> {
    ///     let value = Outcome::<i32>::error(Error::Unknown)
    ///         .match_or_throw(|e| format!("load failed: {}", e))?;
    ///     Ok(value)
    /// }
    ///
    /// assert_eq!(load(), Err("load failed: unknown error".to_string()));
    /// ```
    #[inline]
    pub fn match_or_throw<E, F>(self, exception_f: F) -> Result<T, E>
    where
        F: FnOnce(Error) -> E,
    {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(error) => Err(exception_f(error)),
        }
    }

    /// Transform the value, or raise the failure derived from the error.
    #[inline]
    pub fn match_or_throw_with<U, E, F, G>(self, ok_f: F, exception_f: G) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> E,
    {
        match self {
            Outcome::Ok(value) => Ok(ok_f(value)),
            Outcome::Error(error) => Err(exception_f(error)),
        }
    }

    /// The value, or `T::default()` after appending the error to `errors`.
    ///
    /// Appends exactly one entry on `Error` and none on `Ok`.
    ///
    /// ```rust
    /// use bearing::{Error, Outcome};
    ///
    /// let mut errors = Vec::new();
    /// let name = Outcome::ok("ann".to_string()).match_or_add_error(&mut errors);
    /// let age = Outcome::<u8>::error(Error::invalid_format(Some("age")))
    ///     .match_or_add_error(&mut errors);
    ///
    /// assert_eq!((name.as_str(), age), ("ann", 0));
    /// assert_eq!(errors, vec![Error::invalid_format(Some("age"))]);
    /// ```
    pub fn match_or_add_error(self, errors: &mut Vec<Error>) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %error, collected = errors.len() + 1, "recording error");
                errors.push(error);
                T::default()
            }
        }
    }

    // ========== Side effects ==========

    /// Run a side effect on the success value, returning `self` unchanged.
    #[inline]
    pub fn tap<F>(self, ok_action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            ok_action(value);
        }
        self
    }

    /// Run exactly one side effect depending on the variant, returning `self`
    /// unchanged.
    #[inline]
    pub fn tap_or<F, G>(self, ok_action: F, error_action: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&Error),
    {
        match &self {
            Outcome::Ok(value) => ok_action(value),
            Outcome::Error(error) => error_action(error),
        }
        self
    }

    // ========== Async lift ==========

    /// Lift into an already-completed future.
    #[inline]
    pub fn ready(self) -> futures::future::Ready<Self> {
        futures::future::ready(self)
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Flatten a nested `Outcome`.
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.bind(|inner| inner)
    }
}

// ========== Error lifts ==========

impl Error {
    /// Lift this error into a failed outcome.
    ///
    /// ```rust
    /// use bearing::error::{Error, ToError};
    /// use bearing::Outcome;
    ///
    /// let outcome = "error".to_value_error().to_outcome_error::<i32>();
    /// assert_eq!(outcome.deconstruct(), (false, None, Some(Error::value("error"))));
    /// ```
    #[inline]
    pub fn to_outcome_error<T>(self) -> Outcome<T> {
        Outcome::Error(self)
    }
}

impl Exception {
    /// Lift this exception into a failed outcome carrying
    /// [`Error::Exception`].
    #[inline]
    pub fn to_outcome_error<T>(self) -> Outcome<T> {
        Outcome::Error(Error::exception(self))
    }
}

/// Lift a payload straight into a failed outcome carrying [`Error::Value`].
pub trait ToOutcomeError: Sized {
    /// Wrap `self` as a value error inside `Outcome::Error`.
    fn to_outcome_error_value<T>(self) -> Outcome<T>;
}

impl<V> ToOutcomeError for V
where
    V: Any + fmt::Debug + PartialEq + Send + Sync,
{
    fn to_outcome_error_value<T>(self) -> Outcome<T> {
        Outcome::Error(Error::value(self))
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Outcome<T> {
    /// Returns `Outcome::Error(Error::Unknown)`.
    fn default() -> Self {
        Outcome::Error(Error::Unknown)
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Outcome::Error(error)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Error(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}
