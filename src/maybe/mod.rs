//! An optional value with a combinator surface.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. It never stores an absent payload:
//! a nullable source goes through [`Maybe::from_nullable`] (or `From<Option<T>>`),
//! which performs the presence check once.
//!
//! Every combinator consumes the `Maybe` and returns a new one; `None` is
//! propagated without invoking the supplied function.
//!
//! # Examples
//!
//! ```rust
//! use bearing::Maybe;
//! use bearing::convert::Lift;
//!
//! let shown = 1234_i32.to_maybe().map(|x| x.to_string());
//! assert_eq!(shown, Maybe::Some("1234".to_string()));
//!
//! let missing = Maybe::<i32>::NONE.map(|x| x.to_string());
//! assert_eq!(missing, Maybe::None);
//!
//! let label = Maybe::from(Some(7))
//!     .check(|n| *n > 5)
//!     .match_with(|n| format!("big {}", n), || "small".to_string());
//! assert_eq!(label, "big 7");
//! ```
//!
//! The pending-computation mirror of every combinator lives in
//! [`future::MaybeFutureExt`].

pub mod future;

/// An optional value: `Some(T)` or `None`.
///
/// # Example
///
/// ```rust
/// use bearing::Maybe;
///
/// let some = Maybe::some(42);
/// let none: Maybe<i32> = Maybe::None;
///
/// assert_eq!(some.value_or(0), 42);
/// assert_eq!(none.value_or(0), 0);
/// ```
///
/// Ordering matches `Option`: `None` sorts before any `Some`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value
    None,
    /// A present value
    Some(T),
}

impl<T> Maybe<T> {
    /// The canonical empty instance.
    pub const NONE: Self = Maybe::None;

    // ========== Constructors ==========

    /// Lift a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The empty instance.
    #[inline]
    pub fn none() -> Self {
        Maybe::None
    }

    /// Lift a potentially absent value: `None` stays `None`.
    ///
    /// ```rust
    /// use bearing::Maybe;
    ///
    /// let name: Option<&str> = None;
    /// assert!(Maybe::from_nullable(name).is_none());
    /// assert_eq!(Maybe::from_nullable(Some("ann")), Maybe::Some("ann"));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Some(v),
            None => Maybe::None,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    // ========== Extractors ==========

    /// Split into the presence flag and the payload.
    ///
    /// The payload is `None` exactly when the flag is `false`.
    ///
    /// ```rust
    /// use bearing::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).deconstruct(), (true, Some(3)));
    /// assert_eq!(Maybe::<i32>::None.deconstruct(), (false, None));
    /// ```
    #[inline]
    pub fn deconstruct(self) -> (bool, Option<T>) {
        let is_some = self.is_some();
        (is_some, self.into_option())
    }

    /// Convert into a std `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Non-panicking extraction into an output slot.
    ///
    /// Writes the value (or `T::default()` when absent) and returns whether a
    /// value was present.
    ///
    /// ```rust
    /// use bearing::Maybe;
    ///
    /// let mut slot = 0;
    /// assert!(Maybe::some(9).try_some(&mut slot));
    /// assert_eq!(slot, 9);
    /// assert!(!Maybe::<i32>::None.try_some(&mut slot));
    /// assert_eq!(slot, 0);
    /// ```
    pub fn try_some(&self, value: &mut T) -> bool
    where
        T: Clone + Default,
    {
        match self {
            Maybe::Some(v) => {
                *value = v.clone();
                true
            }
            Maybe::None => {
                *value = T::default();
                false
            }
        }
    }

    /// Iterate over the value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }

    // ========== Transformations ==========

    /// Transform the value, if present.
    ///
    /// Never changes presence: `m.map(f).is_none() == m.is_none()`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => Maybe::Some(f(v)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain a computation that may itself produce no value.
    ///
    /// ```rust
    /// use bearing::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None };
    ///
    /// assert_eq!(Maybe::some(8).bind(half), Maybe::Some(4));
    /// assert_eq!(Maybe::some(3).bind(half), Maybe::None);
    /// assert_eq!(Maybe::None.bind(half), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(v) => f(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Like [`bind`](Maybe::bind), but `None` is re-derived by `none_f`
    /// instead of merely propagated.
    ///
    /// ```rust
    /// use bearing::Maybe;
    ///
    /// let resolved = Maybe::<i32>::None.bind_or(|n| Maybe::Some(n + 1), || Maybe::Some(0));
    /// assert_eq!(resolved, Maybe::Some(0));
    /// ```
    #[inline]
    pub fn bind_or<U, F, G>(self, f: F, none_f: G) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
        G: FnOnce() -> Maybe<U>,
    {
        match self {
            Maybe::Some(v) => f(v),
            Maybe::None => none_f(),
        }
    }

    /// Keep the value only if the predicate holds.
    #[inline]
    pub fn check<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|v| if predicate(&v) { Maybe::Some(v) } else { Maybe::None })
    }

    /// Keep the value only if the predicate fails.
    #[inline]
    pub fn check_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|v| if predicate(&v) { Maybe::None } else { Maybe::Some(v) })
    }

    /// Supply a fallback lazily when no value is present.
    ///
    /// ```rust
    /// use bearing::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::None.map_none(|| Maybe::Some(1)), Maybe::Some(1));
    /// assert_eq!(Maybe::some(5).map_none(|| Maybe::Some(1)), Maybe::Some(5));
    /// ```
    #[inline]
    pub fn map_none<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => f(),
        }
    }

    // ========== Matching ==========

    /// Collapse to a plain value; exactly one branch runs.
    #[inline]
    pub fn match_with<U, F, G>(self, some_f: F, none_f: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Maybe::Some(v) => some_f(v),
            Maybe::None => none_f(),
        }
    }

    /// Collapse to a plain value, using `none` when absent.
    #[inline]
    pub fn match_or<U, F>(self, some_f: F, none: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => some_f(v),
            Maybe::None => none,
        }
    }

    /// The value, or `none` when absent.
    #[inline]
    pub fn value_or(self, none: T) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => none,
        }
    }

    /// The value, or the result of `none_f` when absent.
    #[inline]
    pub fn value_or_else<F>(self, none_f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => none_f(),
        }
    }

    /// The value, or raise the failure built by `none_f`.
    ///
    /// For boundaries where absence is truly exceptional; propagate with `?`.
    ///
    /// ```rust
    /// use bearing::Maybe;
    ///
    /// fn port(configured: Maybe<u16>) -> Result<u16, String> {
    ///     let port = configured.match_or_throw(|| "port is not configured".to_string())?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port(Maybe::some(8080)), Ok(8080));
    /// assert!(port(Maybe::None).is_err());
    /// ```
    #[inline]
    pub fn match_or_throw<E, F>(self, none_f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(v) => Ok(v),
            Maybe::None => Err(none_f()),
        }
    }

    /// Transform the value, or raise the failure built by `none_f`.
    #[inline]
    pub fn match_or_throw_with<U, E, F, G>(self, some_f: F, none_f: G) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> E,
    {
        match self {
            Maybe::Some(v) => Ok(some_f(v)),
            Maybe::None => Err(none_f()),
        }
    }

    // ========== Side effects ==========

    /// Run a side effect on the value, returning `self` unchanged.
    #[inline]
    pub fn tap<F>(self, some_action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(v) = &self {
            some_action(v);
        }
        self
    }

    /// Run exactly one side effect depending on presence, returning `self`
    /// unchanged.
    ///
    /// ```rust
    /// use bearing::Maybe;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// let m = Maybe::<i32>::None.tap_or(|v| seen.set(*v), || seen.set(-1));
    /// assert_eq!(m, Maybe::None);
    /// assert_eq!(seen.get(), -1);
    /// ```
    #[inline]
    pub fn tap_or<F, G>(self, some_action: F, none_action: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self {
            Maybe::Some(v) => some_action(v),
            Maybe::None => none_action(),
        }
        self
    }

    // ========== Async lift ==========

    /// Lift into an already-completed future.
    #[inline]
    pub fn ready(self) -> futures::future::Ready<Self> {
        futures::future::ready(self)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Flatten a nested `Maybe`.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::None`.
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructors() {
        assert!(Maybe::some(1).is_some());
        assert!(Maybe::<i32>::none().is_none());
        assert_eq!(Maybe::<i32>::NONE, Maybe::None);
        assert_eq!(Maybe::<i32>::default(), Maybe::None);
    }

    #[test]
    fn test_from_nullable() {
        assert_eq!(Maybe::from(Some("x")), Maybe::Some("x"));
        assert_eq!(Maybe::<&str>::from(None), Maybe::None);
        let back: Option<i32> = Maybe::some(2).into();
        assert_eq!(back, Some(2));
    }

    #[test]
    fn test_predicates_are_complementary() {
        for m in [Maybe::some(1), Maybe::None] {
            assert_ne!(m.is_some(), m.is_none());
        }
    }

    #[test]
    fn test_deconstruct() {
        assert_eq!(Maybe::some("a").deconstruct(), (true, Some("a")));
        assert_eq!(Maybe::<&str>::None.deconstruct(), (false, None));
    }

    #[test]
    fn test_try_some_writes_default_when_absent() {
        let mut slot = String::from("stale");
        assert!(!Maybe::<String>::None.try_some(&mut slot));
        assert_eq!(slot, "");
        assert!(Maybe::some("fresh".to_string()).try_some(&mut slot));
        assert_eq!(slot, "fresh");
    }

    #[test]
    fn test_map() {
        assert_eq!(Maybe::some(1234).map(|x| x.to_string()), Maybe::Some("1234".to_string()));
        assert_eq!(Maybe::<i32>::NONE.map(|x| x.to_string()), Maybe::None);
    }

    #[test]
    fn test_bind_does_not_invoke_on_none() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::None.bind(|v| {
            calls.set(calls.get() + 1);
            Maybe::Some(v)
        });
        assert_eq!(result, Maybe::None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bind_or() {
        assert_eq!(
            Maybe::some(2).bind_or(|v| Maybe::Some(v * 10), || Maybe::Some(0)),
            Maybe::Some(20)
        );
        assert_eq!(
            Maybe::<i32>::None.bind_or(|v| Maybe::Some(v * 10), || Maybe::None),
            Maybe::None
        );
    }

    #[test]
    fn test_check_and_check_not() {
        assert_eq!(Maybe::some(4).check(|v| v % 2 == 0), Maybe::Some(4));
        assert_eq!(Maybe::some(3).check(|v| v % 2 == 0), Maybe::None);
        assert_eq!(Maybe::some(3).check_not(|v| v % 2 == 0), Maybe::Some(3));
        assert_eq!(Maybe::some(4).check_not(|v| v % 2 == 0), Maybe::None);
        assert_eq!(Maybe::<i32>::None.check(|_| true), Maybe::None);
    }

    #[test]
    fn test_map_none() {
        let calls = Cell::new(0);
        let kept = Maybe::some(1).map_none(|| {
            calls.set(calls.get() + 1);
            Maybe::Some(2)
        });
        assert_eq!(kept, Maybe::Some(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(Maybe::None.map_none(|| Maybe::Some(2)), Maybe::Some(2));
    }

    #[test]
    fn test_match_variants() {
        assert_eq!(Maybe::some(2).match_with(|v| v * 2, || 0), 4);
        assert_eq!(Maybe::<i32>::None.match_with(|v| v * 2, || -1), -1);
        assert_eq!(Maybe::some(2).match_or(|v| v + 1, 0), 3);
        assert_eq!(Maybe::<i32>::None.match_or(|v| v + 1, 0), 0);
        assert_eq!(Maybe::some(2).value_or(7), 2);
        assert_eq!(Maybe::None.value_or(7), 7);
        assert_eq!(Maybe::None.value_or_else(|| 8), 8);
    }

    #[test]
    fn test_match_or_throw() {
        assert_eq!(Maybe::some(1).match_or_throw(|| "missing"), Ok(1));
        assert_eq!(Maybe::<i32>::None.match_or_throw(|| "missing"), Err("missing"));
        assert_eq!(
            Maybe::some(1).match_or_throw_with(|v| v.to_string(), || "missing"),
            Ok("1".to_string())
        );
        assert_eq!(
            Maybe::<i32>::None.match_or_throw_with(|v| v.to_string(), || "missing"),
            Err("missing")
        );
    }

    #[test]
    fn test_tap_returns_self() {
        let seen = Cell::new(0);
        let m = Maybe::some(5).tap(|v| seen.set(*v));
        assert_eq!(m, Maybe::Some(5));
        assert_eq!(seen.get(), 5);

        let none = Maybe::<i32>::None.tap(|_| seen.set(100));
        assert_eq!(none, Maybe::None);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_tap_or_runs_exactly_one_branch() {
        let some_calls = Cell::new(0);
        let none_calls = Cell::new(0);
        let _ = Maybe::some(1).tap_or(|_| some_calls.set(some_calls.get() + 1), || {
            none_calls.set(none_calls.get() + 1)
        });
        let _ = Maybe::<i32>::None.tap_or(|_| some_calls.set(some_calls.get() + 1), || {
            none_calls.set(none_calls.get() + 1)
        });
        assert_eq!((some_calls.get(), none_calls.get()), (1, 1));
    }

    #[test]
    fn test_flatten() {
        assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::Some(1));
        assert_eq!(Maybe::some(Maybe::<i32>::None).flatten(), Maybe::None);
        assert_eq!(Maybe::<Maybe<i32>>::None.flatten(), Maybe::None);
    }

    #[test]
    fn test_iter() {
        assert_eq!(Maybe::some(3).iter().collect::<Vec<_>>(), vec![&3]);
        assert_eq!(Maybe::<i32>::None.into_iter().count(), 0);
        let total: i32 = (&Maybe::some(4)).into_iter().sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_ordering_matches_option() {
        assert!(Maybe::None < Maybe::Some(i32::MIN));
        assert!(Maybe::Some(1) < Maybe::Some(2));

        let mut values = vec![Maybe::Some(3), Maybe::None, Maybe::Some(1)];
        values.sort();
        assert_eq!(values, vec![Maybe::None, Maybe::Some(1), Maybe::Some(3)]);

        let options: Vec<Option<i32>> = values.into_iter().map(Maybe::into_option).collect();
        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(options, sorted);
    }

    #[test]
    fn test_ready() {
        let value = futures::executor::block_on(Maybe::some(1).ready());
        assert_eq!(value, Maybe::Some(1));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
        proptest::option::of(any::<i32>()).prop_map(Maybe::from_nullable)
    }

    fn half(v: i32) -> Maybe<i32> {
        if v % 2 == 0 {
            Maybe::Some(v / 2)
        } else {
            Maybe::None
        }
    }

    fn dec(v: i32) -> Maybe<i32> {
        v.checked_sub(1).map_or(Maybe::None, Maybe::Some)
    }

    proptest! {
        #[test]
        fn prop_map_preserves_presence(m in maybe_i32()) {
            prop_assert_eq!(m.map(|v| v.wrapping_mul(3)).is_none(), m.is_none());
        }

        #[test]
        fn prop_functor_identity(m in maybe_i32()) {
            prop_assert_eq!(m.map(|v| v), m);
        }

        #[test]
        fn prop_bind_associativity(m in maybe_i32()) {
            prop_assert_eq!(m.bind(half).bind(dec), m.bind(|x| half(x).bind(dec)));
        }

        #[test]
        fn prop_left_identity(x: i32) {
            prop_assert_eq!(Maybe::some(x).bind(half), half(x));
        }

        #[test]
        fn prop_tap_is_identity(m in maybe_i32()) {
            prop_assert_eq!(m.tap(|_| {}), m);
            prop_assert_eq!(m.tap_or(|_| {}, || {}), m);
        }

        #[test]
        fn prop_check_not_is_negated_check(m in maybe_i32()) {
            let p = |v: &i32| v % 3 == 0;
            prop_assert_eq!(m.check_not(p), m.check(|v| !p(v)));
        }
    }
}
