//! Raised failures and declarative catch lists
//!
//! An [`Exception`] is a failure raised by code that was not written against
//! [`Outcome`](crate::Outcome): any `std::error::Error` returned from a guarded
//! call. It is shared and cheap to clone, so the same instance can be stored in
//! an [`Exceptional`](crate::Exceptional) and in an [`Error`] without copying.
//!
//! A [`Catch`] list names the exception types a call site is prepared to turn
//! into a value. Everything else keeps propagating. Critical exceptions
//! ([`CriticalError`]) are never turned into a value, even when listed.
//!
//! # Example
//!
//! ```
//! use bearing::exception::{Catch, Exception};
//! use std::num::ParseIntError;
//!
//! let catch = Catch::new().on::<ParseIntError>();
//!
//! let parse_error = Exception::new("x".parse::<i32>().unwrap_err());
//! assert!(catch.matches(&parse_error));
//!
//! let other = Exception::msg("unrelated");
//! assert!(!catch.matches(&other));
//! ```

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::maybe::Maybe;

type Inner = dyn StdError + Send + Sync + 'static;

/// A shared, type-erased raised failure.
///
/// Any `std::error::Error + Send + Sync + 'static` converts into an
/// `Exception` with `?` or [`From`]. Clones share the same instance, see
/// [`Exception::ptr_eq`].
#[derive(Clone)]
pub struct Exception(Arc<Inner>);

impl Exception {
    /// Wrap an error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Exception(Arc::new(error))
    }

    /// Build an exception from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Exception::new(MessageError(message.into()))
    }

    /// Build a [`CriticalError`] exception.
    pub fn critical(message: impl Into<String>) -> Self {
        Exception::new(CriticalError::new(message))
    }

    /// Returns `true` if the wrapped error has type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.0.is::<E>()
    }

    /// Borrow the wrapped error if it has type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` for unrecoverable failures that must never be swallowed.
    pub fn is_critical(&self) -> bool {
        self.is::<CriticalError>()
    }

    /// Returns `true` if both handles share the same raised instance.
    pub fn ptr_eq(&self, other: &Exception) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// The wrapped error as a plain `std::error::Error`.
    pub fn as_std_error(&self) -> &(dyn StdError + 'static) {
        &*self.0
    }

    /// The concrete type name of an exception type, as used by [`Catch`].
    pub fn type_name_of<E: StdError + 'static>() -> &'static str {
        type_name::<E>()
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Exception").field(&self.0).finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<E> From<E> for Exception
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Exception::new(error)
    }
}

impl AsRef<dyn StdError + Send + Sync> for Exception {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }
}

#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for MessageError {}

/// An unrecoverable failure: never converted into a value by a catch list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalError {
    message: String,
}

impl CriticalError {
    /// Create a critical error.
    pub fn new(message: impl Into<String>) -> Self {
        CriticalError {
            message: message.into(),
        }
    }

    /// The message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CriticalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "critical failure: {}", self.message)
    }
}

impl StdError for CriticalError {}

/// Sentinel carried by a default-constructed [`Exceptional`](crate::Exceptional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultConstructed;

impl fmt::Display for DefaultConstructed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Default constructor called.")
    }
}

impl StdError for DefaultConstructed {}

// ========== Catch lists ==========

#[derive(Clone, Copy)]
struct Matcher {
    name: &'static str,
    matches: fn(&Exception) -> bool,
}

fn is_type<E: StdError + 'static>(exception: &Exception) -> bool {
    exception.is::<E>()
}

/// An ordered list of exception types a call site is prepared to catch.
///
/// Built fluently, one type per [`on`](Catch::on) call; there is no upper bound
/// on the number of types.
///
/// ```
/// use bearing::exception::{Catch, Exception};
/// use std::fmt;
/// use std::num::ParseIntError;
///
/// let catch = Catch::new().on::<ParseIntError>().on::<fmt::Error>();
/// assert_eq!(catch.len(), 2);
/// assert!(catch.matches(&Exception::new(fmt::Error)));
/// ```
#[derive(Clone, Default)]
pub struct Catch {
    matchers: Vec<Matcher>,
}

impl Catch {
    /// An empty catch list: catches nothing.
    pub fn new() -> Self {
        Catch {
            matchers: Vec::new(),
        }
    }

    /// Add an exception type to the list.
    pub fn on<E>(mut self) -> Self
    where
        E: StdError + 'static,
    {
        self.matchers.push(Matcher {
            name: type_name::<E>(),
            matches: is_type::<E>,
        });
        self
    }

    /// Returns `true` if the exception's type is listed.
    ///
    /// Critical exceptions never match.
    pub fn matches(&self, exception: &Exception) -> bool {
        !exception.is_critical() && self.matchers.iter().any(|m| (m.matches)(exception))
    }

    /// Convert a listed exception into an [`Error::Exception`]; `None` otherwise.
    pub fn handle(&self, exception: &Exception) -> Maybe<Error> {
        if self.matches(exception) {
            Maybe::Some(Error::exception(exception.clone()))
        } else {
            Maybe::None
        }
    }

    /// Turn the list into a standalone handler closure.
    pub fn into_handler(self) -> impl Fn(&Exception) -> Maybe<Error> {
        move |exception| self.handle(exception)
    }

    /// The listed type names, in order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(|m| m.name)
    }

    /// Number of listed types.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` when no type is listed.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl fmt::Debug for Catch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.type_names()).finish()
    }
}
