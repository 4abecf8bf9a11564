//! Domain error taxonomy
//!
//! `Error` is the failure channel of [`Outcome`](crate::Outcome). It is plain
//! data: combinators pass it through or remap it, they never panic because an
//! outcome holds one.
//!
//! # Variants
//!
//! | Variant          | Carries                                   |
//! |------------------|-------------------------------------------|
//! | `Unknown`        | nothing (well-known singleton)            |
//! | `Value`          | an arbitrary typed payload                |
//! | `Generic`        | an arbitrary typed payload                |
//! | `Exception`      | a caught [`Exception`]                    |
//! | `Validation`     | a message and a [`Tag`]                   |
//! | `Aggregate`      | an ordered list of errors                 |
//! | `InvalidFormat`  | a [`Tag`]                                 |
//! | `NullReference`  | a [`Tag`]                                 |
//!
//! Equality is structural: two errors of the same variant with equal payloads
//! are equal, no matter where they were built.
//!
//! # Examples
//!
//! ```
//! use bearing::error::{Error, ToError, ToValidationError};
//!
//! assert_eq!("boom".to_value_error(), Error::value("boom"));
//! assert_eq!(
//!     "name is required".to_validation_error(Some("  name ")),
//!     Error::validation("name is required", Some("name")),
//! );
//! assert_eq!(Error::default(), Error::Unknown);
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::exception::Exception;

/// A domain failure carried by [`Outcome::Error`](crate::Outcome::Error).
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Error {
    /// No further information is available.
    #[default]
    Unknown,
    /// A failure described by an arbitrary value.
    Value(ErrorValue),
    /// A failure described by an arbitrary value, kept apart from `Value`.
    Generic(ErrorValue),
    /// A caught exception lifted into the error channel.
    Exception(ExceptionError),
    /// A validation message with an optional classifier.
    Validation(ValidationError),
    /// Several errors collected in order.
    Aggregate(AggregateError),
    /// A value did not have the expected format.
    InvalidFormat(Tag),
    /// A required value was absent.
    NullReference(Tag),
}

impl Error {
    /// The well-known unknown error.
    pub const UNKNOWN: Error = Error::Unknown;

    /// Wrap a payload as a [`Error::Value`].
    pub fn value<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
    {
        Error::Value(ErrorValue::new(value))
    }

    /// Wrap a payload as a [`Error::Generic`].
    pub fn generic<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
    {
        Error::Generic(ErrorValue::new(value))
    }

    /// Wrap an exception as a [`Error::Exception`].
    pub fn exception(exception: Exception) -> Self {
        Error::Exception(ExceptionError::new(exception))
    }

    /// Build a [`Error::Validation`]; the tag is trimmed, `None` becomes empty.
    pub fn validation(message: impl Into<String>, tag: Option<&str>) -> Self {
        Error::Validation(ValidationError::new(message, tag))
    }

    /// Collect errors, in order, into a [`Error::Aggregate`].
    pub fn aggregate(errors: Vec<Error>) -> Self {
        Error::Aggregate(AggregateError::new(errors))
    }

    /// Build a tagged [`Error::InvalidFormat`].
    pub fn invalid_format(tag: Option<&str>) -> Self {
        Error::InvalidFormat(Tag::new(tag))
    }

    /// Build a tagged [`Error::NullReference`].
    pub fn null_reference(tag: Option<&str>) -> Self {
        Error::NullReference(Tag::new(tag))
    }

    /// Returns `true` for [`Error::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Error::Unknown)
    }

    /// The tag of a tagged variant, if this error has one.
    ///
    /// ```
    /// use bearing::Error;
    ///
    /// assert_eq!(Error::invalid_format(Some(" date ")).tag(), Some("date"));
    /// assert_eq!(Error::Unknown.tag(), None);
    /// ```
    pub fn tag(&self) -> Option<&str> {
        match self {
            Error::Validation(validation) => Some(validation.tag()),
            Error::InvalidFormat(tag) | Error::NullReference(tag) => Some(tag.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unknown => write!(f, "unknown error"),
            Error::Value(value) => write!(f, "value error: {:?}", value),
            Error::Generic(value) => write!(f, "generic error: {:?}", value),
            Error::Exception(error) => write!(f, "exception: {}", error.exception()),
            Error::Validation(error) => write!(f, "{}", error),
            Error::Aggregate(error) => write!(f, "{}", error),
            Error::InvalidFormat(tag) => write_tagged(f, "invalid format", tag),
            Error::NullReference(tag) => write_tagged(f, "null reference", tag),
        }
    }
}

fn write_tagged(f: &mut fmt::Formatter<'_>, label: &str, tag: &Tag) -> fmt::Result {
    if tag.is_empty() {
        write!(f, "{}", label)
    } else {
        write!(f, "{} [{}]", label, tag)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Exception(error) => Some(error.exception().as_std_error()),
            _ => None,
        }
    }
}

impl From<Exception> for Error {
    fn from(exception: Exception) -> Self {
        Error::exception(exception)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

impl From<AggregateError> for Error {
    fn from(error: AggregateError) -> Self {
        Error::Aggregate(error)
    }
}

// ========== Tag ==========

/// A free-text classifier attached to some error variants.
///
/// Always trimmed; an absent tag is the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Normalize an optional tag.
    ///
    /// ```
    /// use bearing::error::Tag;
    ///
    /// assert_eq!(Tag::new(Some("  email  ")).as_str(), "email");
    /// assert_eq!(Tag::new(None).as_str(), "");
    /// ```
    pub fn new(tag: Option<&str>) -> Self {
        Tag(tag.unwrap_or_default().trim().to_string())
    }

    /// The normalized tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when no tag was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Tag::new(Some(tag))
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Tag::new(Some(&tag))
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

// ========== Payload errors ==========

trait Payload: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn Payload) -> bool;
    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn type_name(&self) -> &'static str;
}

impl<T> Payload for T
where
    T: Any + fmt::Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Payload) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A type-erased error payload with structural equality.
///
/// Two payloads are equal when they have the same concrete type and compare
/// equal. Note that `&'static str` and `String` are different types.
///
/// ```
/// use bearing::error::ErrorValue;
///
/// let value = ErrorValue::new(42_u32);
/// assert_eq!(value, ErrorValue::new(42_u32));
/// assert_ne!(value, ErrorValue::new(42_i64));
/// assert_eq!(value.downcast_ref::<u32>(), Some(&42));
/// ```
#[derive(Clone)]
pub struct ErrorValue(Arc<dyn Payload>);

impl ErrorValue {
    /// Wrap a payload.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Send + Sync,
    {
        ErrorValue(Arc::new(value))
    }

    /// Borrow the payload if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload().as_any().downcast_ref::<T>()
    }

    /// Returns `true` if the payload has type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload().as_any().is::<T>()
    }

    /// The name of the payload's concrete type.
    pub fn type_name(&self) -> &'static str {
        self.payload().type_name()
    }

    fn payload(&self) -> &dyn Payload {
        self.0.as_ref()
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.payload().dyn_fmt(f)
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        self.payload().dyn_eq(other.payload())
    }
}

/// A caught exception in the error channel.
///
/// Equality is identity of the wrapped exception.
#[derive(Clone, Debug)]
pub struct ExceptionError {
    exception: Exception,
}

impl ExceptionError {
    /// Wrap an exception.
    pub fn new(exception: Exception) -> Self {
        ExceptionError { exception }
    }

    /// The wrapped exception.
    pub fn exception(&self) -> &Exception {
        &self.exception
    }

    /// Consume and return the wrapped exception.
    pub fn into_exception(self) -> Exception {
        self.exception
    }
}

impl PartialEq for ExceptionError {
    fn eq(&self, other: &Self) -> bool {
        self.exception.ptr_eq(&other.exception)
    }
}

/// A validation message with a normalized tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: String,
    tag: Tag,
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(message: impl Into<String>, tag: Option<&str>) -> Self {
        ValidationError {
            message: message.into(),
            tag: Tag::new(tag),
        }
    }

    /// The message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The normalized tag, empty if none was supplied.
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            write!(f, "validation error: {}", self.message)
        } else {
            write!(f, "validation error [{}]: {}", self.tag, self.message)
        }
    }
}

impl StdError for ValidationError {}

/// An ordered collection of errors.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AggregateError {
    errors: Vec<Error>,
}

impl AggregateError {
    /// Collect errors, keeping their order.
    pub fn new(errors: Vec<Error>) -> Self {
        AggregateError { errors }
    }

    /// The collected errors, in insertion order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Consume and return the collected errors.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` when nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s)", self.errors.len())?;
        for (index, error) in self.errors.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{}{}", separator, error)?;
        }
        Ok(())
    }
}

// ========== Lift helpers ==========

/// Lift any comparable value into the error channel.
///
/// Implemented for every `Any + Debug + PartialEq + Send + Sync` type.
pub trait ToError: Sized {
    /// Wrap `self` as a [`Error::Value`].
    fn to_value_error(self) -> Error;

    /// Wrap `self` as a [`Error::Generic`].
    fn to_generic_error(self) -> Error;
}

impl<T> ToError for T
where
    T: Any + fmt::Debug + PartialEq + Send + Sync,
{
    fn to_value_error(self) -> Error {
        Error::value(self)
    }

    fn to_generic_error(self) -> Error {
        Error::generic(self)
    }
}

/// Lift a message into a [`Error::Validation`].
pub trait ToValidationError {
    /// Build a validation error with an optional tag.
    fn to_validation_error(self, tag: Option<&str>) -> Error;
}

impl<S: Into<String>> ToValidationError for S {
    fn to_validation_error(self, tag: Option<&str>) -> Error {
        Error::validation(self, tag)
    }
}

/// Lift a list of errors into a [`Error::Aggregate`].
pub trait ToAggregateError {
    /// Build an aggregate error, keeping order.
    fn to_aggregate_error(self) -> Error;
}

impl ToAggregateError for Vec<Error> {
    fn to_aggregate_error(self) -> Error {
        Error::aggregate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Error::default(), Error::Unknown);
        assert_eq!(Error::UNKNOWN, Error::Unknown);
        assert!(Error::default().is_unknown());
    }

    #[test]
    fn test_value_error_structural_equality() {
        assert_eq!("error".to_value_error(), Error::value("error"));
        assert_ne!("error".to_value_error(), Error::value("other"));
        assert_ne!("error".to_value_error(), Error::value("error".to_string()));
    }

    #[test]
    fn test_value_and_generic_are_distinct() {
        assert_ne!(Error::value(1), Error::generic(1));
        assert_eq!(1_i32.to_generic_error(), Error::generic(1));
    }

    #[test]
    fn test_error_value_downcast() {
        let error = Error::value(vec![1, 2, 3]);
        match error {
            Error::Value(value) => {
                assert!(value.is::<Vec<i32>>());
                assert_eq!(value.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
                assert_eq!(value.downcast_ref::<String>(), None);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_tag_normalization() {
        assert_eq!(Tag::new(Some("  tag ")).as_str(), "tag");
        assert_eq!(Tag::new(None).as_str(), "");
        assert!(Tag::new(Some("   ")).is_empty());
        assert_eq!(Tag::from(" x "), Tag::new(Some("x")));
    }

    #[test]
    fn test_tagged_errors() {
        assert_eq!(
            Error::invalid_format(Some(" date ")),
            Error::InvalidFormat(Tag::new(Some("date")))
        );
        assert_eq!(Error::null_reference(None).tag(), Some(""));
        assert_ne!(Error::invalid_format(None), Error::null_reference(None));
    }

    #[test]
    fn test_validation_error() {
        let error = ValidationError::new("too short", Some(" name "));
        assert_eq!(error.message(), "too short");
        assert_eq!(error.tag(), "name");
        assert_eq!(
            "too short".to_validation_error(Some("name")),
            Error::Validation(error)
        );
    }

    #[test]
    fn test_aggregate_preserves_order() {
        let errors = vec![Error::Unknown, Error::value(1), Error::invalid_format(None)];
        let aggregate = errors.clone().to_aggregate_error();
        match aggregate {
            Error::Aggregate(inner) => {
                assert_eq!(inner.len(), 3);
                assert_eq!(inner.errors(), errors.as_slice());
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_exception_error_identity() {
        let exception = Exception::msg("boom");
        let a = Error::exception(exception.clone());
        let b = Error::exception(exception);
        let c = Error::exception(Exception::msg("boom"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::Unknown.to_string(), "unknown error");
        assert_eq!(Error::value("x").to_string(), "value error: \"x\"");
        assert_eq!(
            Error::validation("required", Some("email")).to_string(),
            "validation error [email]: required"
        );
        assert_eq!(Error::invalid_format(None).to_string(), "invalid format");
        assert_eq!(
            Error::null_reference(Some("id")).to_string(),
            "null reference [id]"
        );
        assert_eq!(
            Error::aggregate(vec![Error::Unknown, Error::invalid_format(None)]).to_string(),
            "2 error(s): unknown error; invalid format"
        );
        assert_eq!(
            Error::exception(Exception::msg("boom")).to_string(),
            "exception: boom"
        );
    }

    #[test]
    fn test_source_exposes_exception() {
        let error = Error::exception(Exception::msg("boom"));
        let source = error.source().map(|s| s.to_string());
        assert_eq!(source, Some("boom".to_string()));
        assert!(Error::Unknown.source().is_none());
    }
}
