//! Tracing support for `Maybe`, `Outcome` and `Exceptional`.
//!
//! The `trace_*` methods emit one event on the failure branch and return the
//! value unchanged, so they can sit anywhere in a pipeline. [`InstrumentExt`]
//! runs a pending computation inside a span. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.
//!
//! ```rust
//! use bearing::instrument::OutcomeTracingExt;
//! use bearing::{Error, Outcome};
//!
//! let _ = tracing_subscriber::fmt().with_test_writer().try_init();
//!
//! let outcome = Outcome::<u32>::error(Error::invalid_format(Some("port")))
//!     .trace_error("parse port")
//!     .value_or(8080);
//! assert_eq!(outcome, 8080);
//! ```

use std::future::Future;

use crate::exceptional::Exceptional;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Log the error branch of an [`Outcome`].
pub trait OutcomeTracingExt: Sized {
    /// Emit a `warn!` event naming `operation` when this is an error.
    fn trace_error(self, operation: &str) -> Self;
}

impl<T> OutcomeTracingExt for Outcome<T> {
    fn trace_error(self, operation: &str) -> Self {
        if let Outcome::Error(error) = &self {
            tracing::warn!(operation, error = %error, "operation failed");
        }
        self
    }
}

/// Log the empty branch of a [`Maybe`].
pub trait MaybeTracingExt: Sized {
    /// Emit a `debug!` event naming `operation` when no value is present.
    fn trace_none(self, operation: &str) -> Self;
}

impl<T> MaybeTracingExt for Maybe<T> {
    fn trace_none(self, operation: &str) -> Self {
        if self.is_none() {
            tracing::debug!(operation, "no value");
        }
        self
    }
}

/// Log the failure branch of an [`Exceptional`].
pub trait ExceptionalTracingExt: Sized {
    /// Emit a `warn!` event naming `operation` when this is a failure.
    fn trace_failure(self, operation: &str) -> Self;
}

impl<T> ExceptionalTracingExt for Exceptional<T> {
    fn trace_failure(self, operation: &str) -> Self {
        if let Exceptional::Failure(exception) = &self {
            tracing::warn!(
                operation,
                exception = %exception,
                critical = exception.is_critical(),
                "operation raised"
            );
        }
        self
    }
}

/// Run a pending computation inside a span.
pub trait InstrumentExt: Future + Sized {
    /// Enter `span` every time the computation is polled.
    ///
    /// ```rust
    /// use bearing::instrument::InstrumentExt;
    /// use bearing::maybe::future::MaybeFutureExt;
    /// use bearing::Maybe;
    ///
    /// # tokio_test::block_on(async {
    /// let found = async { Maybe::some("cfg") }
    ///     .map_async(str::len)
    ///     .in_span(tracing::debug_span!("load_config"))
    ///     .await;
    /// assert_eq!(found, Maybe::Some(3));
    /// # });
    /// ```
    fn in_span(self, span: tracing::Span) -> tracing::instrument::Instrumented<Self> {
        tracing::Instrument::instrument(self, span)
    }
}

impl<Fut: Future> InstrumentExt for Fut {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::exception::Exception;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_trace_error_logs_on_error_only() {
        let ok = Outcome::ok(1).trace_error("load_user");
        assert_eq!(ok, Outcome::Ok(1));
        assert!(!logs_contain("operation failed"));

        let failed = Outcome::<i32>::error(Error::null_reference(Some("user"))).trace_error("load_user");
        assert!(failed.is_error());
        assert!(logs_contain("operation failed"));
        assert!(logs_contain("null reference [user]"));
    }

    #[test]
    #[traced_test]
    fn test_trace_none() {
        let none = Maybe::<i32>::None.trace_none("find_order");
        assert_eq!(none, Maybe::None);
        assert!(logs_contain("find_order"));
    }

    #[test]
    #[traced_test]
    fn test_trace_failure() {
        let failed = Exceptional::<i32>::failure(Exception::msg("disk full")).trace_failure("write");
        assert!(failed.is_failure());
        assert!(logs_contain("disk full"));
    }

    #[test]
    #[traced_test]
    fn test_match_or_add_error_is_traced() {
        let mut errors = Vec::new();
        let _ = Outcome::<i32>::error(Error::Unknown).match_or_add_error(&mut errors);
        assert!(logs_contain("recording error"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_in_span_returns_value() {
        let value = async { Outcome::ok(42) }
            .in_span(tracing::info_span!("test_span"))
            .await;
        assert_eq!(value, Outcome::Ok(42));
    }

    #[test]
    #[traced_test]
    fn test_critical_reraise_is_logged() {
        let raised = crate::validate::try_catch_with(
            (),
            |_| Err::<Outcome<i32>, _>(Exception::critical("oom")),
            |_| Maybe::None,
        );
        assert!(raised.is_err());
        assert!(logs_contain("re-raising critical exception"));
    }
}
