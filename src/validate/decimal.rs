//! Best-effort conversion into [`rust_decimal::Decimal`].
//!
//! Integers convert exactly; text is trimmed and parsed; anything that does not
//! parse, and any absent value, yields `None`.
//!
//! ```rust
//! use bearing::validate::AsDecimal;
//! use bearing::Maybe;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(" 12.50 ".as_decimal(), Maybe::Some(Decimal::new(1250, 2)));
//! assert_eq!("twelve".as_decimal(), Maybe::None);
//! assert_eq!(Some(7_i64).as_decimal(), Maybe::Some(Decimal::from(7)));
//! ```

use rust_decimal::Decimal;

use crate::maybe::Maybe;

/// Values that may be read as a [`Decimal`].
pub trait AsDecimal {
    /// The decimal reading of `self`, if there is one.
    fn as_decimal(&self) -> Maybe<Decimal>;
}

impl AsDecimal for Decimal {
    fn as_decimal(&self) -> Maybe<Decimal> {
        Maybe::Some(*self)
    }
}

impl AsDecimal for i32 {
    fn as_decimal(&self) -> Maybe<Decimal> {
        Maybe::Some(Decimal::from(*self))
    }
}

impl AsDecimal for i64 {
    fn as_decimal(&self) -> Maybe<Decimal> {
        Maybe::Some(Decimal::from(*self))
    }
}

impl AsDecimal for str {
    fn as_decimal(&self) -> Maybe<Decimal> {
        Maybe::from_nullable(self.trim().parse::<Decimal>().ok())
    }
}

impl AsDecimal for String {
    fn as_decimal(&self) -> Maybe<Decimal> {
        self.as_str().as_decimal()
    }
}

impl<T: AsDecimal + ?Sized> AsDecimal for &T {
    fn as_decimal(&self) -> Maybe<Decimal> {
        (**self).as_decimal()
    }
}

impl<T: AsDecimal> AsDecimal for Option<T> {
    fn as_decimal(&self) -> Maybe<Decimal> {
        match self {
            Some(value) => value.as_decimal(),
            None => Maybe::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_convert_exactly() {
        assert_eq!(42_i32.as_decimal(), Maybe::Some(Decimal::from(42)));
        assert_eq!(i64::MAX.as_decimal(), Maybe::Some(Decimal::from(i64::MAX)));
        assert_eq!((-3_i32).as_decimal(), Maybe::Some(Decimal::new(-3, 0)));
    }

    #[test]
    fn test_decimal_is_identity() {
        let price = Decimal::new(1999, 2);
        assert_eq!(price.as_decimal(), Maybe::Some(price));
    }

    #[test]
    fn test_text_is_trimmed_and_parsed() {
        assert_eq!("  0.25\n".as_decimal(), Maybe::Some(Decimal::new(25, 2)));
        assert_eq!(String::from("-10").as_decimal(), Maybe::Some(Decimal::from(-10)));
        assert_eq!("".as_decimal(), Maybe::None);
        assert_eq!("1.2.3".as_decimal(), Maybe::None);
    }

    #[test]
    fn test_absent_is_none() {
        assert_eq!(None::<i32>.as_decimal(), Maybe::None);
        assert_eq!(None::<&str>.as_decimal(), Maybe::None);
        assert_eq!(Some("3").as_decimal(), Maybe::Some(Decimal::from(3)));
    }
}
