//! Left-to-right application for plain values.
//!
//! [`Pipe`] lets a pipeline start from any value, not only from a
//! [`Maybe`](crate::Maybe) or an [`Outcome`](crate::Outcome):
//!
//! ```rust
//! use bearing::pipe::Pipe;
//!
//! let label = "  Ada "
//!     .pipe(str::trim)
//!     .pipe(str::to_uppercase)
//!     .also(|s| assert_eq!(s.len(), 3));
//! assert_eq!(label, "ADA");
//! ```

use std::future::Future;

/// Apply functions to a value in reading order.
///
/// Blanket-implemented for every sized type.
pub trait Pipe: Sized {
    /// `f(self)`.
    #[inline]
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }

    /// `f(self)` when a function is supplied, `self` otherwise.
    ///
    /// ```rust
    /// use bearing::pipe::Pipe;
    ///
    /// let normalize: Option<fn(i32) -> i32> = None;
    /// assert_eq!(5_i32.pipe_if(normalize), 5);
    /// assert_eq!(5_i32.pipe_if(Some(|n: i32| n.abs() * 10)), 50);
    /// ```
    #[inline]
    fn pipe_if<F>(self, f: Option<F>) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        match f {
            Some(f) => f(self),
            None => self,
        }
    }

    /// Run a side effect on the value, then return it.
    #[inline]
    fn also<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }
}

impl<T> Pipe for T {}

/// [`Pipe`] for pending values.
pub trait PipeFutureExt<T>: Future<Output = T> + Sized {
    /// Await, then apply `f`.
    fn pipe_async<U, F>(self, f: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> U,
    {
        async move { f(self.await) }
    }

    /// Await, then apply and await the async `f`.
    fn pipe_await<U, F, Fut>(self, f: F) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { f(self.await).await }
    }

    /// Await, run a side effect on the value, then return it.
    fn also_async<F>(self, action: F) -> impl Future<Output = T>
    where
        F: FnOnce(&T),
    {
        async move {
            let value = self.await;
            action(&value);
            value
        }
    }
}

impl<T, Fut> PipeFutureExt<T> for Fut where Fut: Future<Output = T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_pipe_applies_in_order() {
        let result = 3_i32.pipe(|n| n + 1).pipe(|n| n * 10).pipe(|n| n.to_string());
        assert_eq!(result, "40");
    }

    #[test]
    fn test_pipe_if() {
        let double = |n: i32| n * 2;
        assert_eq!(4_i32.pipe_if(Some(double)), 8);
        assert_eq!(4_i32.pipe_if(None::<fn(i32) -> i32>), 4);
    }

    #[test]
    fn test_also_returns_value() {
        let seen = Cell::new(0);
        assert_eq!(9_i32.also(|n| seen.set(*n)), 9);
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn test_pipe_future() {
        assert_eq!(block_on(async { 2 }.pipe_async(|n| n + 1)), 3);
        assert_eq!(block_on(async { 2 }.pipe_await(|n| async move { n * 5 })), 10);
        let seen = Cell::new(0);
        assert_eq!(block_on(async { 6 }.also_async(|n| seen.set(*n))), 6);
        assert_eq!(seen.get(), 6);
    }
}
