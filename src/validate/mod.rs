//! Everyday validation helpers built on [`Maybe`](crate::Maybe) and
//! [`Outcome`](crate::Outcome).
//!
//! | Module       | Input                         | Produces                     |
//! |--------------|-------------------------------|------------------------------|
//! | [`string`]   | optional text                 | trimmed tokens               |
//! | [`guid`]     | `uuid::Uuid`                  | non-nil identifiers          |
//! | [`decimal`]  | numbers and numeric text      | `rust_decimal::Decimal`      |
//! | [`presence`] | `Option<T>`                   | present values or an error   |
//! | [`catch`]    | fallible closures             | caught exceptions as errors  |

pub mod catch;
pub mod decimal;
pub mod guid;
pub mod presence;
pub mod string;

pub use catch::{try_catch, try_catch_with};
pub use decimal::AsDecimal;
pub use guid::{to_maybe_is_not_empty, to_outcome_is_not_empty, to_outcome_is_not_empty_with};
pub use presence::{to_outcome_is_not_null, to_outcome_is_not_null_with};
pub use string::{as_token, as_token_or, as_token_or_else, if_null, tokenize};
