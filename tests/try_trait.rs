#![cfg(feature = "try_trait")]
#![feature(try_trait_v2)]

use bearing::{Error, Maybe, Outcome};

#[test]
fn test_maybe_question_mark() {
    fn first_char_code(s: Maybe<&str>) -> Maybe<u32> {
        let s = s?;
        let c = Maybe::from_nullable(s.chars().next())?;
        Maybe::some(c as u32)
    }

    assert_eq!(first_char_code(Maybe::some("A")), Maybe::Some(65));
    assert_eq!(first_char_code(Maybe::some("")), Maybe::None);
    assert_eq!(first_char_code(Maybe::None), Maybe::None);
}

#[test]
fn test_outcome_question_mark() {
    fn positive(n: i32) -> Outcome<i32> {
        if n > 0 {
            Outcome::ok(n)
        } else {
            Outcome::error(Error::validation("must be positive", Some("n")))
        }
    }

    fn sum_positive(a: i32, b: i32) -> Outcome<i32> {
        let a = positive(a)?;
        let b = positive(b)?;
        Outcome::ok(a + b)
    }

    assert_eq!(sum_positive(1, 2), Outcome::Ok(3));
    assert_eq!(
        sum_positive(1, -2),
        Outcome::Error(Error::validation("must be positive", Some("n")))
    );
}

#[test]
fn test_mixing_result_and_outcome() {
    fn parse(s: &str) -> Outcome<i32> {
        // Result from a standard library function
        let parsed: i32 = s
            .parse()
            .map_err(|_| Error::invalid_format(Some("number")))?;

        Outcome::ok(parsed * 2)
    }

    assert_eq!(parse("21"), Outcome::Ok(42));
    assert_eq!(
        parse("twenty"),
        Outcome::Error(Error::invalid_format(Some("number")))
    );
}
