//! `?` support for `Maybe` and `Outcome` (nightly, feature-gated)
//!
//! With the `try_trait` feature enabled, `?` short-circuits on
//! `Maybe::None` and on `Outcome::Error`, and a `std::result::Result` whose
//! error converts into [`Error`] can be propagated inside a function returning
//! an `Outcome`.

use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Try};

use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

impl<T> Try for Maybe<T> {
    type Output = T;
    type Residual = Maybe<Infallible>;

    #[inline]
    fn from_output(output: T) -> Self {
        Maybe::Some(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Maybe::Some(value) => ControlFlow::Continue(value),
            Maybe::None => ControlFlow::Break(Maybe::None),
        }
    }
}

impl<T> FromResidual<Maybe<Infallible>> for Maybe<T> {
    #[inline]
    fn from_residual(_: Maybe<Infallible>) -> Self {
        Maybe::None
    }
}

impl<T> Try for Outcome<T> {
    type Output = T;
    type Residual = Outcome<Infallible>;

    #[inline]
    fn from_output(output: T) -> Self {
        Outcome::Ok(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Outcome::Ok(value) => ControlFlow::Continue(value),
            Outcome::Error(error) => ControlFlow::Break(Outcome::Error(error)),
        }
    }
}

impl<T> FromResidual<Outcome<Infallible>> for Outcome<T> {
    #[inline]
    fn from_residual(residual: Outcome<Infallible>) -> Self {
        match residual {
            Outcome::Error(error) => Outcome::Error(error),
            Outcome::Ok(never) => match never {},
        }
    }
}

impl<T, E> FromResidual<Result<Infallible, E>> for Outcome<T>
where
    E: Into<Error>,
{
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Err(error) => Outcome::Error(error.into()),
            Ok(never) => match never {},
        }
    }
}
