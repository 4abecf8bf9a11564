//! Combinators over pending `Maybe` values.
//!
//! [`MaybeFutureExt`] is implemented for every `Future<Output = Maybe<T>>`.
//! Each method awaits the pending value, then applies the rule of the
//! synchronous combinator with the same stem. The returned future is lazy:
//! nothing runs, and no delegate is invoked, until it is polled.
//!
//! Methods ending in `_async` take plain delegates; methods ending in `_await`
//! take delegates that return a future, which is awaited in turn.
//!
//! # Example
//!
//! ```rust
//! use bearing::Maybe;
//! use bearing::maybe::future::MaybeFutureExt;
//!
//! # tokio_test::block_on(async {
//! let lookup = async { Maybe::some(21) };
//! let doubled = lookup
//!     .map_async(|x| x * 2)
//!     .bind_await(|x| async move { Maybe::some(x) })
//!     .await;
//! assert_eq!(doubled, Maybe::Some(42));
//! # });
//! ```

use std::future::Future;

use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Extension methods for futures resolving to a [`Maybe`].
///
/// Blanket-implemented; you don't need to implement this trait yourself.
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Await, then [`Maybe::map`].
    fn map_async<U, F>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Await, then map with an async delegate.
    fn map_await<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await {
                Maybe::Some(value) => Maybe::Some(f(value).await),
                Maybe::None => Maybe::None,
            }
        }
    }

    /// Await, then [`Maybe::bind`].
    fn bind_async<U, F>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        async move { self.await.bind(f) }
    }

    /// Await, then bind with an async delegate.
    fn bind_await<U, F, Fut>(self, f: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move {
            match self.await {
                Maybe::Some(value) => f(value).await,
                Maybe::None => Maybe::None,
            }
        }
    }

    /// Await, then [`Maybe::bind_or`].
    fn bind_or_async<U, F, G>(self, f: F, none_f: G) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
        G: FnOnce() -> Maybe<U>,
    {
        async move { self.await.bind_or(f, none_f) }
    }

    /// Await, then bind either branch with async delegates.
    fn bind_or_await<U, F, G, FutS, FutN>(self, f: F, none_f: G) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> FutS,
        G: FnOnce() -> FutN,
        FutS: Future<Output = Maybe<U>>,
        FutN: Future<Output = Maybe<U>>,
    {
        async move {
            match self.await {
                Maybe::Some(value) => f(value).await,
                Maybe::None => none_f().await,
            }
        }
    }

    /// Await, then [`Maybe::check`].
    fn check_async<P>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.check(predicate) }
    }

    /// Await, then [`Maybe::check_not`].
    fn check_not_async<P>(self, predicate: P) -> impl Future<Output = Maybe<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        async move { self.await.check_not(predicate) }
    }

    /// Await, then [`Maybe::map_none`].
    fn map_none_async<F>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Maybe<T>,
    {
        async move { self.await.map_none(f) }
    }

    /// Await, then derive a fallback with an async delegate.
    fn map_none_await<F, Fut>(self, f: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<T>>,
    {
        async move {
            match self.await {
                Maybe::Some(value) => Maybe::Some(value),
                Maybe::None => f().await,
            }
        }
    }

    /// Await, then [`Maybe::match_with`].
    fn match_with_async<U, F, G>(self, some_f: F, none_f: G) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        async move { self.await.match_with(some_f, none_f) }
    }

    /// Await, then collapse with async delegates.
    fn match_with_await<U, F, G, FutS, FutN>(self, some_f: F, none_f: G) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> FutS,
        G: FnOnce() -> FutN,
        FutS: Future<Output = U>,
        FutN: Future<Output = U>,
    {
        async move {
            match self.await {
                Maybe::Some(value) => some_f(value).await,
                Maybe::None => none_f().await,
            }
        }
    }

    /// Await, then [`Maybe::match_or`].
    fn match_or_async<U, F>(self, some_f: F, none: U) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.match_or(some_f, none) }
    }

    /// Await, then [`Maybe::value_or`].
    fn value_or_async(self, none: T) -> impl Future<Output = T> {
        async move { self.await.value_or(none) }
    }

    /// Await, then [`Maybe::value_or_else`].
    fn value_or_else_async<F>(self, none_f: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.value_or_else(none_f) }
    }

    /// Await, then [`Maybe::match_or_throw`].
    fn match_or_throw_async<E, F>(self, none_f: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce() -> E,
    {
        async move { self.await.match_or_throw(none_f) }
    }

    /// Await, then [`Maybe::match_or_throw_with`].
    fn match_or_throw_with_async<U, E, F, G>(
        self,
        some_f: F,
        none_f: G,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> E,
    {
        async move { self.await.match_or_throw_with(some_f, none_f) }
    }

    /// Await, transform the value with an async delegate, or raise.
    fn match_or_throw_await<U, E, F, G, Fut>(
        self,
        some_f: F,
        none_f: G,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        G: FnOnce() -> E,
        Fut: Future<Output = U>,
    {
        async move {
            match self.await {
                Maybe::Some(value) => Ok(some_f(value).await),
                Maybe::None => Err(none_f()),
            }
        }
    }

    /// Await, then [`Maybe::tap`].
    fn tap_async<F>(self, some_action: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.tap(some_action) }
    }

    /// Await, then [`Maybe::tap_or`].
    fn tap_or_async<F, G>(self, some_action: F, none_action: G) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        async move { self.await.tap_or(some_action, none_action) }
    }

    /// Await, then run an async side effect on a copy of the value.
    fn tap_await<F, Fut>(self, some_action: F) -> impl Future<Output = Maybe<T>>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let maybe = self.await;
            if let Maybe::Some(value) = &maybe {
                some_action(value.clone()).await;
            }
            maybe
        }
    }

    /// Await, then run exactly one async side effect depending on presence.
    fn tap_or_await<F, G, FutS, FutN>(
        self,
        some_action: F,
        none_action: G,
    ) -> impl Future<Output = Maybe<T>>
    where
        T: Clone,
        F: FnOnce(T) -> FutS,
        G: FnOnce() -> FutN,
        FutS: Future<Output = ()>,
        FutN: Future<Output = ()>,
    {
        async move {
            let maybe = self.await;
            match &maybe {
                Maybe::Some(value) => some_action(value.clone()).await,
                Maybe::None => none_action().await,
            }
            maybe
        }
    }

    /// Await, then [`Maybe::to_outcome`].
    fn to_outcome_async(self, error: Error) -> impl Future<Output = Outcome<T>> {
        async move { self.await.to_outcome(error) }
    }

    /// Await, then [`Maybe::to_outcome_with`].
    fn to_outcome_with_async<F>(self, error_f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce() -> Error,
    {
        async move { self.await.to_outcome_with(error_f) }
    }
}

impl<T, Fut> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}

/// Lift a pending std `Option` into a pending [`Maybe`].
pub trait OptionFutureExt<T>: Future<Output = Option<T>> + Sized {
    /// Await, then [`Maybe::from_nullable`].
    ///
    /// ```rust
    /// use bearing::Maybe;
    /// use bearing::maybe::future::OptionFutureExt;
    ///
    /// # tokio_test::block_on(async {
    /// let found = async { Some("x") }.to_maybe_async().await;
    /// assert_eq!(found, Maybe::Some("x"));
    /// # });
    /// ```
    fn to_maybe_async(self) -> impl Future<Output = Maybe<T>> {
        async move { Maybe::from_nullable(self.await) }
    }
}

impl<T, Fut> OptionFutureExt<T> for Fut where Fut: Future<Output = Option<T>> {}
