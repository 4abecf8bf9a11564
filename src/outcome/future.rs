//! Combinators over pending `Outcome` values.
//!
//! [`OutcomeFutureExt`] mirrors the synchronous [`Outcome`] surface for every
//! `Future<Output = Outcome<T>>`: await first, then apply the synchronous rule.
//! `_async` methods take plain delegates, `_await` methods take delegates
//! returning futures. Nothing runs until the returned future is polled.
//!
//! [`LiftFutureExt`] lifts any pending value into a pending `Outcome`.
//!
//! # Example
//!
//! ```rust
//! use bearing::{Error, Outcome};
//! use bearing::outcome::future::{LiftFutureExt, OutcomeFutureExt};
//!
//! # tokio_test::block_on(async {
//! let fetched = async { 17 }
//!     .to_outcome_if_async(|n| *n > 0, Error::validation("must be positive", None))
//!     .map_async(|n| n * 2)
//!     .bind_await(|n| async move { Outcome::ok(n + 1) })
//!     .await;
//! assert_eq!(fetched, Outcome::Ok(35));
//! # });
//! ```

use std::future::Future;

use crate::convert::Lift;
use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Extension methods for futures resolving to an [`Outcome`].
///
/// Blanket-implemented; you don't need to implement this trait yourself.
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Await, then [`Outcome::map`].
    fn map_async<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Await, then map with an async delegate.
    fn map_await<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => Outcome::Ok(f(value).await),
                Outcome::Error(error) => Outcome::Error(error),
            }
        }
    }

    /// Await, then [`Outcome::bind`].
    fn bind_async<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.bind(f) }
    }

    /// Await, then bind with an async delegate.
    fn bind_await<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => f(value).await,
                Outcome::Error(error) => Outcome::Error(error),
            }
        }
    }

    /// Await, then [`Outcome::bind_or`].
    fn bind_or_async<U, F, G>(self, f: F, error_f: G) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
        G: FnOnce(Error) -> Outcome<U>,
    {
        async move { self.await.bind_or(f, error_f) }
    }

    /// Await, then bind either branch with async delegates.
    fn bind_or_await<U, F, G, FutO, FutE>(
        self,
        f: F,
        error_f: G,
    ) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> FutO,
        G: FnOnce(Error) -> FutE,
        FutO: Future<Output = Outcome<U>>,
        FutE: Future<Output = Outcome<U>>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => f(value).await,
                Outcome::Error(error) => error_f(error).await,
            }
        }
    }

    /// Await, then [`Outcome::bind_if`].
    fn bind_if_async<P, F>(self, predicate: P, f: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<T>,
    {
        async move { self.await.bind_if(predicate, f) }
    }

    /// Await, then conditionally bind with an async delegate.
    fn bind_if_await<P, F, Fut>(self, predicate: P, f: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => {
                    if predicate(&value) {
                        f(value).await
                    } else {
                        Outcome::Ok(value)
                    }
                }
                Outcome::Error(error) => Outcome::Error(error),
            }
        }
    }

    /// Await, then [`Outcome::bind_if_else`].
    fn bind_if_else_async<U, P, F, G>(
        self,
        predicate: P,
        true_f: F,
        false_f: G,
    ) -> impl Future<Output = Outcome<U>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> Outcome<U>,
        G: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.bind_if_else(predicate, true_f, false_f) }
    }

    /// Await, then bind one of two async delegates chosen by the predicate.
    fn bind_if_else_await<U, P, F, G, FutT, FutF>(
        self,
        predicate: P,
        true_f: F,
        false_f: G,
    ) -> impl Future<Output = Outcome<U>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> FutT,
        G: FnOnce(T) -> FutF,
        FutT: Future<Output = Outcome<U>>,
        FutF: Future<Output = Outcome<U>>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => {
                    if predicate(&value) {
                        true_f(value).await
                    } else {
                        false_f(value).await
                    }
                }
                Outcome::Error(error) => Outcome::Error(error),
            }
        }
    }

    /// Await, then [`Outcome::map_error`].
    fn map_error_async<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        async move { self.await.map_error(f) }
    }

    /// Await, then re-derive the outcome from its error with an async
    /// delegate.
    fn map_error_await<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Error(error) => f(error).await,
            }
        }
    }

    /// Await, then [`Outcome::check`].
    fn check_async<P>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.check(predicate, error) }
    }

    /// Await, then [`Outcome::check_not`].
    fn check_not_async<P>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.check_not(predicate, error) }
    }

    /// Await, then [`Outcome::check_with`].
    fn check_with_async<P, F>(self, predicate: P, error_f: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> Error,
    {
        async move { self.await.check_with(predicate, error_f) }
    }

    /// Await, then [`Outcome::check_not_with`].
    fn check_not_with_async<P, F>(
        self,
        predicate: P,
        error_f: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> Error,
    {
        async move { self.await.check_not_with(predicate, error_f) }
    }

    /// Await, then [`Outcome::match_with`].
    fn match_with_async<U, F, G>(self, ok_f: F, error_f: G) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> U,
    {
        async move { self.await.match_with(ok_f, error_f) }
    }

    /// Await, then collapse with async delegates.
    fn match_with_await<U, F, G, FutO, FutE>(self, ok_f: F, error_f: G) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> FutO,
        G: FnOnce(Error) -> FutE,
        FutO: Future<Output = U>,
        FutE: Future<Output = U>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => ok_f(value).await,
                Outcome::Error(error) => error_f(error).await,
            }
        }
    }

    /// Await, then [`Outcome::value_or`].
    fn value_or_async(self, error_value: T) -> impl Future<Output = T> {
        async move { self.await.value_or(error_value) }
    }

    /// Await, then [`Outcome::value_or_else`].
    fn value_or_else_async<F>(self, error_f: F) -> impl Future<Output = T>
    where
        F: FnOnce(Error) -> T,
    {
        async move { self.await.value_or_else(error_f) }
    }

    /// Await, then derive a fallback value from the error asynchronously.
    fn value_or_else_await<F, Fut>(self, error_f: F) -> impl Future<Output = T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = T>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => value,
                Outcome::Error(error) => error_f(error).await,
            }
        }
    }

    /// Await, then [`Outcome::match_or_throw`].
    fn match_or_throw_async<E, F>(self, exception_f: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(Error) -> E,
    {
        async move { self.await.match_or_throw(exception_f) }
    }

    /// Await, then [`Outcome::match_or_throw_with`].
    fn match_or_throw_with_async<U, E, F, G>(
        self,
        ok_f: F,
        exception_f: G,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> E,
    {
        async move { self.await.match_or_throw_with(ok_f, exception_f) }
    }

    /// Await, transform the value with an async delegate, or raise.
    fn match_or_throw_await<U, E, F, G, Fut>(
        self,
        ok_f: F,
        exception_f: G,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        G: FnOnce(Error) -> E,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await {
                Outcome::Ok(value) => Ok(ok_f(value).await),
                Outcome::Error(error) => Err(exception_f(error)),
            }
        }
    }

    /// Await, then [`Outcome::tap`].
    fn tap_async<F>(self, ok_action: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap(ok_action) }
    }

    /// Await, then [`Outcome::tap_or`].
    fn tap_or_async<F, G>(self, ok_action: F, error_action: G) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
        G: FnOnce(&Error),
    {
        async move { self.await.tap_or(ok_action, error_action) }
    }

    /// Await, then run an async side effect on a copy of the success value.
    fn tap_await<F, Fut>(self, ok_action: F) -> impl Future<Output = Outcome<T>>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let outcome = self.await;
            if let Outcome::Ok(value) = &outcome {
                ok_action(value.clone()).await;
            }
            outcome
        }
    }

    /// Await, then run exactly one async side effect: on a copy of the value
    /// or of the error.
    fn tap_or_await<F, G, FutO, FutE>(
        self,
        ok_action: F,
        error_action: G,
    ) -> impl Future<Output = Outcome<T>>
    where
        T: Clone,
        F: FnOnce(T) -> FutO,
        G: FnOnce(Error) -> FutE,
        FutO: Future<Output = ()>,
        FutE: Future<Output = ()>,
    {
        async move {
            let outcome = self.await;
            match &outcome {
                Outcome::Ok(value) => ok_action(value.clone()).await,
                Outcome::Error(error) => error_action(error.clone()).await,
            }
            outcome
        }
    }

    /// Await, then [`Outcome::to_maybe`].
    fn to_maybe_async(self) -> impl Future<Output = Maybe<T>> {
        async move { self.await.to_maybe() }
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

/// Lift any pending value into a pending [`Outcome`].
pub trait LiftFutureExt<T>: Future<Output = T> + Sized {
    /// Await, then [`Lift::to_outcome_if`].
    fn to_outcome_if_async<P>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.to_outcome_if(predicate, error) }
    }

    /// Await, then [`Lift::to_outcome_if_else`].
    fn to_outcome_if_else_async<P, F>(
        self,
        predicate: P,
        error_f: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Error,
    {
        async move { self.await.to_outcome_if_else(predicate, error_f) }
    }

    /// Await, then [`Lift::to_outcome_if_default`].
    fn to_outcome_if_default_async<P>(self, predicate: P) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.to_outcome_if_default(predicate) }
    }

    /// Await, then keep the value when the async predicate resolves to `true`.
    ///
    /// The predicate's future must not borrow the value; copy out what it
    /// needs.
    fn to_outcome_if_await<P, Fut>(
        self,
        predicate: P,
        error: Error,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.to_outcome_if_else_await(predicate, |_| error)
    }

    /// Await, then keep the value when the async predicate resolves to
    /// `true`, otherwise derive the error from the rejected value.
    fn to_outcome_if_else_await<P, F, Fut>(
        self,
        predicate: P,
        error_f: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        F: FnOnce(&T) -> Error,
        Fut: Future<Output = bool>,
    {
        async move {
            let value = self.await;
            if predicate(&value).await {
                Outcome::Ok(value)
            } else {
                Outcome::Error(error_f(&value))
            }
        }
    }

    /// Await, then keep the value when the async predicate resolves to
    /// `true`, otherwise fail with [`Error::Unknown`].
    fn to_outcome_if_default_await<P, Fut>(self, predicate: P) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.to_outcome_if_await(predicate, Error::Unknown)
    }

    /// Await, then [`Lift::to_outcome_when`].
    fn to_outcome_when_async(self, flag: bool, error: Error) -> impl Future<Output = Outcome<T>> {
        async move { self.await.to_outcome_when(flag, error) }
    }
}

impl<T, Fut> LiftFutureExt<T> for Fut where Fut: Future<Output = T> {}
