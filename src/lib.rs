//! # Bearing
//!
//! > *Keep your bearing: every step either carries a value or says why not.*
//!
//! A Rust library of railway-oriented types for domain code.
//!
//! ## The types
//!
//! - [`Maybe<T>`]: a value or nothing.
//! - [`Outcome<T>`]: a value or a domain [`Error`].
//! - [`Exceptional<T>`]: a value or a caught [`Exception`].
//!
//! Each carries the same combinator vocabulary (`map`, `bind`, `check`,
//! `match_with`, `tap`, ...) and a pending mirror for futures
//! ([`maybe::future`], [`outcome::future`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use bearing::prelude::*;
//!
//! fn parse_quantity(input: Option<&str>) -> Outcome<u32> {
//!     as_token(input)
//!         .to_outcome(Error::null_reference(Some("quantity")))
//!         .bind(|token| match token.parse::<u32>() {
//!             Ok(n) => Outcome::ok(n),
//!             Err(_) => Outcome::error(Error::invalid_format(Some("quantity"))),
//!         })
//!         .check(|n| *n > 0, Error::validation("must be positive", Some("quantity")))
//! }
//!
//! assert_eq!(parse_quantity(Some(" 12 ")), Outcome::Ok(12));
//! assert_eq!(
//!     parse_quantity(Some("   ")),
//!     Outcome::Error(Error::null_reference(Some("quantity")))
//! );
//!
//! let mut errors = Vec::new();
//! let total = parse_quantity(Some("3")).match_or_add_error(&mut errors)
//!     + parse_quantity(Some("x")).match_or_add_error(&mut errors);
//! assert_eq!(total, 3);
//! assert_eq!(errors, vec![Error::invalid_format(Some("quantity"))]);
//! ```
//!
//! ## Features
//!
//! | Feature     | Adds                                                   |
//! |-------------|--------------------------------------------------------|
//! | `tracing`   | log events and the [`instrument`] module               |
//! | `serde`     | `Serialize`/`Deserialize` for `Maybe` and `error::Tag` |
//! | `proptest`  | `Arbitrary` for `Maybe`, `Outcome` and `Error`         |
//! | `try_trait` | `?` on `Maybe` and `Outcome` (nightly)                 |

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod convert;
pub mod error;
pub mod exception;
pub mod exceptional;
#[cfg(feature = "tracing")]
pub mod instrument;
pub mod maybe;
pub mod outcome;
pub mod pipe;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
#[cfg(feature = "try_trait")]
mod try_trait;
pub mod validate;

// Re-exports
pub use convert::Lift;
pub use error::Error;
pub use exception::{Catch, Exception};
pub use exceptional::Exceptional;
pub use maybe::Maybe;
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::convert::Lift;
    pub use crate::error::{Error, ToAggregateError, ToError, ToValidationError};
    pub use crate::exception::{Catch, Exception};
    pub use crate::exceptional::{try_catch, Exceptional};
    pub use crate::maybe::future::{MaybeFutureExt, OptionFutureExt};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::future::{LiftFutureExt, OutcomeFutureExt};
    pub use crate::outcome::{Outcome, ToOutcomeError};
    pub use crate::pipe::{Pipe, PipeFutureExt};
    pub use crate::validate::{as_token, tokenize, AsDecimal};
}
