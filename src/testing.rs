//! Testing utilities for code built on bearing's types
//!
//! Assertion macros check the variant and hand back the payload, so a test can
//! keep going with the unwrapped value. The `expect_*` functions take a
//! callback instead and report the caller's location on mismatch.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use bearing::{assert_error, assert_ok, assert_some, Error, Maybe, Outcome};
//!
//! let port = assert_some!(Maybe::some(8080));
//! assert_eq!(port, 8080);
//!
//! let name = assert_ok!(Outcome::ok("ada"));
//! assert_eq!(name, "ada");
//!
//! let error = assert_error!(Outcome::<i32>::error(Error::Unknown));
//! assert!(error.is_unknown());
//! ```
//!
//! ## Callback Checkers
//!
//! ```rust
//! use bearing::testing::{expect_error_variant, expect_ok};
//! use bearing::{Error, Outcome};
//!
//! expect_ok(Outcome::ok(3), |v| assert_eq!(v, 3));
//! expect_error_variant(
//!     Outcome::<i32>::error(Error::validation("required", Some("name"))),
//!     |e| match e {
//!         Error::Validation(v) => Some(v),
//!         _ => None,
//!     },
//!     |v| assert_eq!(v.tag(), "name"),
//! );
//! ```

use std::fmt;

use crate::error::Error;
use crate::exception::Exception;
use crate::exceptional::Exceptional;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Assert that a `Maybe` holds a value, evaluating to that value.
///
/// # Example
///
/// ```rust
/// use bearing::{assert_some, Maybe};
///
/// let v = assert_some!(Maybe::some(42));
/// assert_eq!(v, 42);
/// ```
#[macro_export]
macro_rules! assert_some {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Some(value) => value,
            $crate::Maybe::None => {
                panic!("Expected Some, but was None");
            }
        }
    };
}

/// Assert that a `Maybe` is empty.
///
/// # Example
///
/// ```rust
/// use bearing::{assert_none, Maybe};
///
/// assert_none!(Maybe::<i32>::None);
/// ```
#[macro_export]
macro_rules! assert_none {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::None => {}
            $crate::Maybe::Some(value) => {
                panic!("Expected None, got Some: {:?}", value);
            }
        }
    };
}

/// Assert that an `Outcome` is `Ok`, evaluating to the value.
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Error(error) => {
                panic!("Expected Ok, got Error: {:?}", error);
            }
        }
    };
}

/// Assert that an `Outcome` is `Error`, evaluating to the error.
#[macro_export]
macro_rules! assert_error {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Error(error) => error,
            $crate::Outcome::Ok(value) => {
                panic!("Expected Error, got Ok: {:?}", value);
            }
        }
    };
}

/// Assert that an `Outcome` is an `Error` matching a pattern.
///
/// # Example
///
/// ```rust
/// use bearing::{assert_error_matches, Error, Outcome};
///
/// let outcome = Outcome::<i32>::error(Error::invalid_format(Some("date")));
/// assert_error_matches!(outcome, Error::InvalidFormat(tag) if tag.as_str() == "date");
/// ```
#[macro_export]
macro_rules! assert_error_matches {
    ($outcome:expr, $pattern:pat $(if $guard:expr)?) => {
        match $outcome {
            $crate::Outcome::Error(error) => match error {
                $pattern $(if $guard)? => {}
                other => panic!(
                    "Error does not match `{}`: {:?}",
                    stringify!($pattern),
                    other
                ),
            },
            $crate::Outcome::Ok(value) => {
                panic!("Expected Error, got Ok: {:?}", value);
            }
        }
    };
}

/// Assert that an `Exceptional` is a `Success`, evaluating to the value.
#[macro_export]
macro_rules! assert_success {
    ($exceptional:expr) => {
        match $exceptional {
            $crate::Exceptional::Success(value) => value,
            $crate::Exceptional::Failure(exception) => {
                panic!("Expected Success, got Failure: {}", exception);
            }
        }
    };
}

/// Assert that an `Exceptional` is a `Failure`, evaluating to the exception.
#[macro_export]
macro_rules! assert_failure {
    ($exceptional:expr) => {
        match $exceptional {
            $crate::Exceptional::Failure(exception) => exception,
            $crate::Exceptional::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
}

/// Check a present value with `action`; panics on `None`.
#[track_caller]
pub fn expect_some<T, F>(maybe: Maybe<T>, action: F)
where
    F: FnOnce(T),
{
    match maybe {
        Maybe::Some(value) => action(value),
        Maybe::None => panic!("Expected Some, but was None"),
    }
}

/// Check a success value with `action`; panics on `Error`.
#[track_caller]
pub fn expect_ok<T, F>(outcome: Outcome<T>, action: F)
where
    F: FnOnce(T),
{
    match outcome {
        Outcome::Ok(value) => action(value),
        Outcome::Error(error) => panic!("Expected Ok, got Error: {}", error),
    }
}

/// Check an error with `action`; panics on `Ok`.
#[track_caller]
pub fn expect_error<T, F>(outcome: Outcome<T>, action: F)
where
    T: fmt::Debug,
    F: FnOnce(Error),
{
    match outcome {
        Outcome::Error(error) => action(error),
        Outcome::Ok(value) => panic!("Expected Error, got Ok: {:?}", value),
    }
}

/// Check the payload of a specific error variant.
///
/// `select` picks the variant out of the error; `None` means the error has a
/// different shape and the check panics.
#[track_caller]
pub fn expect_error_variant<T, V, S, F>(outcome: Outcome<T>, select: S, action: F)
where
    T: fmt::Debug,
    S: FnOnce(Error) -> Option<V>,
    F: FnOnce(V),
{
    match outcome {
        Outcome::Error(error) => {
            let shown = error.to_string();
            match select(error) {
                Some(variant) => action(variant),
                None => panic!("Error is not of the expected variant: {}", shown),
            }
        }
        Outcome::Ok(value) => panic!("Expected Error, got Ok: {:?}", value),
    }
}

/// Check a success value with `action`; panics on `Failure`.
#[track_caller]
pub fn expect_success<T, F>(exceptional: Exceptional<T>, action: F)
where
    F: FnOnce(T),
{
    match exceptional {
        Exceptional::Success(value) => action(value),
        Exceptional::Failure(exception) => panic!("Expected Success, got Failure: {}", exception),
    }
}

/// Check a caught exception with `action`; panics on `Success`.
#[track_caller]
pub fn expect_failure<T, F>(exceptional: Exceptional<T>, action: F)
where
    T: fmt::Debug,
    F: FnOnce(Exception),
{
    match exceptional {
        Exceptional::Failure(exception) => action(exception),
        Exceptional::Success(value) => panic!("Expected Failure, got Success: {:?}", value),
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::weighted(0.75, any_with::<T>(args))
            .prop_map(Maybe::from_nullable)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Error {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        fn tag() -> impl Strategy<Value = Option<String>> {
            proptest::option::of("[ a-z]{0,6}")
        }

        let leaf = prop_oneof![
            Just(Error::Unknown),
            "[a-z]{0,8}".prop_map(Error::value),
            any::<i64>().prop_map(Error::generic),
            ("[a-z ]{1,12}", tag())
                .prop_map(|(message, tag)| Error::validation(message, tag.as_deref())),
            tag().prop_map(|tag| Error::invalid_format(tag.as_deref())),
            tag().prop_map(|tag| Error::null_reference(tag.as_deref())),
        ];
        leaf.prop_recursive(2, 8, 4, |inner| {
            proptest::collection::vec(inner, 0..4).prop_map(Error::aggregate)
        })
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Outcome<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Outcome::Ok),
            any::<Error>().prop_map(Outcome::Error),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_some_macro_yields_value() {
        assert_eq!(assert_some!(Maybe::some("x")), "x");
    }

    #[test]
    fn assert_none_macro() {
        assert_none!(Maybe::<i32>::None);
    }

    #[test]
    fn assert_ok_and_error_macros() {
        assert_eq!(assert_ok!(Outcome::ok(1)), 1);
        assert_eq!(
            assert_error!(Outcome::<i32>::error(Error::Unknown)),
            Error::Unknown
        );
    }

    #[test]
    fn assert_error_matches_macro() {
        assert_error_matches!(
            Outcome::<i32>::error(Error::null_reference(Some("id"))),
            Error::NullReference(_)
        );
    }

    #[test]
    fn assert_success_and_failure_macros() {
        assert_eq!(assert_success!(Exceptional::success(2)), 2);
        let exception = assert_failure!(Exceptional::<i32>::default());
        assert_eq!(exception.to_string(), "Default constructor called.");
    }

    #[test]
    #[should_panic(expected = "Expected Some, but was None")]
    fn assert_some_panics_on_none() {
        let _ = assert_some!(Maybe::<i32>::None);
    }

    #[test]
    #[should_panic(expected = "Expected None, got Some")]
    fn assert_none_panics_on_some() {
        assert_none!(Maybe::some(1));
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Error")]
    fn assert_ok_panics_on_error() {
        let _ = assert_ok!(Outcome::<i32>::error(Error::Unknown));
    }

    #[test]
    #[should_panic(expected = "Error does not match")]
    fn assert_error_matches_panics_on_other_variant() {
        assert_error_matches!(Outcome::<i32>::error(Error::Unknown), Error::Value(_));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let _ = assert_failure!(Exceptional::success(1));
    }

    #[test]
    fn expect_functions_pass_payloads() {
        expect_some(Maybe::some(1), |v| assert_eq!(v, 1));
        expect_ok(Outcome::ok(2), |v| assert_eq!(v, 2));
        expect_error(Outcome::<i32>::error(Error::Unknown), |e| {
            assert_eq!(e, Error::Unknown)
        });
        expect_success(Exceptional::success(3), |v| assert_eq!(v, 3));
        expect_failure(Exceptional::<i32>::default(), |e| {
            assert!(e.is::<crate::exception::DefaultConstructed>())
        });
    }

    #[test]
    #[should_panic(expected = "Error is not of the expected variant")]
    fn expect_error_variant_panics_on_other_variant() {
        expect_error_variant(
            Outcome::<i32>::error(Error::Unknown),
            |e| match e {
                Error::Aggregate(a) => Some(a),
                _ => None,
            },
            |_| {},
        );
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn maybe_arbitrary_is_consistent(m in any::<Maybe<i32>>()) {
                prop_assert_ne!(m.is_some(), m.is_none());
            }

            #[test]
            fn outcome_arbitrary_is_consistent(o in any::<Outcome<u8>>()) {
                let (is_ok, value, error) = o.deconstruct();
                prop_assert_eq!(is_ok, value.is_some());
                prop_assert_eq!(!is_ok, error.is_some());
            }

            #[test]
            fn error_display_never_empty(e in any::<Error>()) {
                prop_assert!(!e.to_string().is_empty());
            }
        }
    }
}
