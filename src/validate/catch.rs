//! Bridge raised exceptions into the [`Outcome`] error channel.
//!
//! A guarded closure returns `Result<Outcome<U>, Exception>`: the `Outcome`
//! is its own verdict, the `Err` is a raised exception. Exceptions the call
//! site declared become [`Error::Exception`]; everything else is handed back
//! as `Err` to keep propagating.
//!
//! ```rust
//! use bearing::exception::{Catch, Exception};
//! use bearing::validate::try_catch;
//! use bearing::{Error, Outcome};
//! use std::num::ParseIntError;
//!
//! let catch = Catch::new().on::<ParseIntError>();
//! let parse = |s: &str| -> Result<Outcome<i32>, Exception> { Ok(Outcome::ok(s.parse()?)) };
//!
//! assert_eq!(try_catch("5", parse, &catch).ok(), Some(Outcome::Ok(5)));
//! let failed = try_catch("five", parse, &catch).ok();
//! assert!(matches!(failed, Some(Outcome::Error(Error::Exception(_)))));
//! ```

use crate::error::Error;
use crate::exception::{Catch, Exception};
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Run `f` on `value`, converting exceptions listed in `catch` into
/// [`Error::Exception`].
///
/// Unlisted and critical exceptions are returned as `Err`.
pub fn try_catch<T, U, F>(value: T, f: F, catch: &Catch) -> Result<Outcome<U>, Exception>
where
    F: FnOnce(T) -> Result<Outcome<U>, Exception>,
{
    try_catch_with(value, f, |exception| catch.handle(exception))
}

/// Run `f` on `value`, letting `handler` decide which exceptions become
/// errors.
///
/// A critical exception is re-raised before the handler sees it. When the
/// handler returns `None` the exception is re-raised as well.
///
/// ```rust
/// use bearing::exception::Exception;
/// use bearing::validate::try_catch_with;
/// use bearing::{Error, Maybe, Outcome};
///
/// let timeout_as_error = |e: &Exception| {
///     if e.to_string().contains("timed out") {
///         Maybe::Some(Error::validation("service unavailable", Some("upstream")))
///     } else {
///         Maybe::None
///     }
/// };
///
/// let outcome = try_catch_with(
///     (),
///     |_| Err::<Outcome<i32>, _>(Exception::msg("request timed out")),
///     timeout_as_error,
/// );
/// assert_eq!(
///     outcome.ok(),
///     Some(Outcome::Error(Error::validation("service unavailable", Some("upstream"))))
/// );
/// ```
pub fn try_catch_with<T, U, F, H>(value: T, f: F, handler: H) -> Result<Outcome<U>, Exception>
where
    F: FnOnce(T) -> Result<Outcome<U>, Exception>,
    H: FnOnce(&Exception) -> Maybe<Error>,
{
    let exception = match f(value) {
        Ok(outcome) => return Ok(outcome),
        Err(exception) => exception,
    };

    if exception.is_critical() {
        #[cfg(feature = "tracing")]
        tracing::warn!(exception = %exception, "re-raising critical exception");
        return Err(exception);
    }

    match handler(&exception) {
        Maybe::Some(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(exception = %exception, error = %error, "converted exception to error");
            Ok(Outcome::Error(error))
        }
        Maybe::None => Err(exception),
    }
}
