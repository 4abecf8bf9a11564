//! Text normalization.
//!
//! A token is text with surrounding whitespace removed; absent text tokenizes
//! to the empty string, and a blank token counts as no token at all.

use crate::convert::Lift;
use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// `value`, else `default`, else the empty string.
///
/// ```rust
/// use bearing::validate::if_null;
///
/// assert_eq!(if_null(Some("a"), Some("b")), "a");
/// assert_eq!(if_null(None, Some("b")), "b");
/// assert_eq!(if_null(None, None), "");
/// ```
pub fn if_null<'a>(value: Option<&'a str>, default: Option<&'a str>) -> &'a str {
    value.or(default).unwrap_or_default()
}

/// Trim the text; absent text becomes `""`.
///
/// ```rust
/// use bearing::validate::tokenize;
///
/// assert_eq!(tokenize(Some("  test  ")), "test");
/// assert_eq!(tokenize(None), "");
/// ```
pub fn tokenize(value: Option<&str>) -> String {
    if_null(value, None).trim().to_string()
}

/// The token, or `None` when it is blank.
pub fn as_token(value: Option<&str>) -> Maybe<String> {
    tokenize(value).to_maybe().check_not(|token| token.is_empty())
}

/// The token, or `error` when it is blank.
pub fn as_token_or(value: Option<&str>, error: Error) -> Outcome<String> {
    as_token_or_else(value, || error)
}

/// The token, or a lazily built error when it is blank.
pub fn as_token_or_else<F>(value: Option<&str>, error_f: F) -> Outcome<String>
where
    F: FnOnce() -> Error,
{
    tokenize(value)
        .to_ok()
        .check_not_with(|token| token.is_empty(), error_f)
}
