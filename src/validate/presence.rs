//! Presence checks for values that may be absent.

use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// `Ok(v)` for `Some(v)`, `Error(error)` for `None`.
///
/// ```rust
/// use bearing::validate::to_outcome_is_not_null;
/// use bearing::{Error, Outcome};
///
/// let user: Option<&str> = None;
/// assert_eq!(
///     to_outcome_is_not_null(user, Error::null_reference(Some("user"))),
///     Outcome::Error(Error::null_reference(Some("user")))
/// );
/// ```
pub fn to_outcome_is_not_null<T>(value: Option<T>, error: Error) -> Outcome<T> {
    to_outcome_is_not_null_with(value, || error)
}

/// `Ok(v)` for `Some(v)`, otherwise the lazily built error.
pub fn to_outcome_is_not_null_with<T, F>(value: Option<T>, error_f: F) -> Outcome<T>
where
    F: FnOnce() -> Error,
{
    Maybe::from_nullable(value).to_outcome_with(error_f)
}
