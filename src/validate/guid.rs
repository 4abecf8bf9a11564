//! Identifier checks over [`uuid::Uuid`].

use uuid::Uuid;

use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// `Some(id)` unless `id` is the nil UUID.
///
/// ```rust
/// use bearing::validate::to_maybe_is_not_empty;
/// use bearing::Maybe;
/// use uuid::Uuid;
///
/// assert_eq!(to_maybe_is_not_empty(Uuid::nil()), Maybe::None);
/// ```
pub fn to_maybe_is_not_empty(id: Uuid) -> Maybe<Uuid> {
    if id.is_nil() {
        Maybe::None
    } else {
        Maybe::Some(id)
    }
}

/// `Ok(id)` unless `id` is the nil UUID, in which case `error`.
pub fn to_outcome_is_not_empty(id: Uuid, error: Error) -> Outcome<Uuid> {
    to_outcome_is_not_empty_with(id, || error)
}

/// `Ok(id)` unless `id` is the nil UUID, in which case the lazily built
/// error.
pub fn to_outcome_is_not_empty_with<F>(id: Uuid, error_f: F) -> Outcome<Uuid>
where
    F: FnOnce() -> Error,
{
    to_maybe_is_not_empty(id).to_outcome_with(error_f)
}
