//! End-to-end scenarios across lifts, combinators and validation helpers.

use bearing::prelude::*;
use bearing::validate::{
    if_null, to_maybe_is_not_empty, to_outcome_is_not_empty, to_outcome_is_not_null,
};
use rust_decimal::Decimal;
use std::num::ParseIntError;
use uuid::Uuid;

const ORDER_ID: Uuid = Uuid::from_u128(0x6f1c_2a44_9b0e_4d1f_a1f3_22c9_87e0_4b11);

#[test]
fn test_lift_and_map_to_string() {
    assert_eq!(1234_i32.to_maybe().map(|x| x.to_string()), Maybe::some("1234".to_string()));
    assert_eq!(Maybe::<i32>::None.map(|x| x.to_string()), Maybe::None);
}

#[test]
fn test_value_error_deconstructs() {
    let (is_ok, ok, error) = "error".to_value_error().to_outcome_error::<i32>().deconstruct();
    assert!(!is_ok);
    assert_eq!(ok, None);
    assert_eq!(error, Some(Error::value("error")));
}

#[test]
fn test_default_outcome_deconstructs_to_unknown() {
    let (is_ok, ok, error) = Outcome::<String>::default().deconstruct();
    assert!(!is_ok);
    assert_eq!(ok, None);
    assert_eq!(error, Some(Error::UNKNOWN));
}

#[test]
fn test_nil_uuid_is_empty() {
    assert_eq!(to_maybe_is_not_empty(Uuid::nil()), Maybe::None);
    assert_eq!(to_maybe_is_not_empty(ORDER_ID), Maybe::Some(ORDER_ID));
    assert_eq!(
        to_outcome_is_not_empty(Uuid::nil(), Error::null_reference(Some("order_id"))),
        Outcome::Error(Error::null_reference(Some("order_id")))
    );
}

#[test]
fn test_tokenize() {
    assert_eq!(tokenize(Some("  test  ")), "test");
    assert_eq!(tokenize(None), "");
    assert_eq!(if_null(None, Some("fallback")), "fallback");
}

// ========== A small order-entry flow ==========

#[derive(Debug, Clone, PartialEq)]
struct OrderLine {
    order_id: Uuid,
    sku: String,
    price: Decimal,
}

fn parse_line(order_id: Uuid, sku: Option<&str>, price: Option<&str>) -> Outcome<OrderLine> {
    let mut errors = Vec::new();

    let order_id = to_outcome_is_not_empty(order_id, Error::null_reference(Some("order_id")))
        .match_or_add_error(&mut errors);
    let sku = as_token(sku)
        .to_outcome(Error::null_reference(Some("sku")))
        .match_or_add_error(&mut errors);
    let price = to_outcome_is_not_null(price, Error::null_reference(Some("price")))
        .bind(|raw| raw.as_decimal().to_outcome(Error::invalid_format(Some("price"))))
        .check_not(
            |p| p.is_sign_negative(),
            Error::validation("must not be negative", Some("price")),
        )
        .match_or_add_error(&mut errors);

    if errors.is_empty() {
        Outcome::ok(OrderLine {
            order_id,
            sku,
            price,
        })
    } else {
        Outcome::error(errors.to_aggregate_error())
    }
}

#[test]
fn test_order_line_valid() {
    let line = parse_line(ORDER_ID, Some(" SKU-1 "), Some(" 19.90 "));
    assert_eq!(
        line,
        Outcome::Ok(OrderLine {
            order_id: ORDER_ID,
            sku: "SKU-1".to_string(),
            price: Decimal::new(1990, 2),
        })
    );
}

#[test]
fn test_order_line_collects_every_error_in_order() {
    let line = parse_line(Uuid::nil(), Some("  "), Some("abc"));
    assert_eq!(
        line,
        Outcome::Error(Error::aggregate(vec![
            Error::null_reference(Some("order_id")),
            Error::null_reference(Some("sku")),
            Error::invalid_format(Some("price")),
        ]))
    );
}

#[test]
fn test_order_line_negative_price() {
    let line = parse_line(ORDER_ID, Some("SKU-2"), Some("-1"));
    let (_, _, error) = line.deconstruct();
    match error {
        Some(Error::Aggregate(aggregate)) => {
            assert_eq!(
                aggregate.errors(),
                &[Error::validation("must not be negative", Some("price"))]
            );
        }
        other => panic!("unexpected: {:?}", other),
    }
}

// ========== Exceptions ==========

#[test]
fn test_caught_exception_flows_into_outcome() {
    let catch = Catch::new().on::<ParseIntError>();
    let quantity = |raw: &str| -> Result<Outcome<i32>, Exception> {
        Ok(Outcome::ok(raw.trim().parse::<i32>()?))
    };

    let parsed = bearing::validate::try_catch(" 4 ", quantity, &catch);
    assert_eq!(parsed.ok(), Some(Outcome::Ok(4)));

    let failed = bearing::validate::try_catch("four", quantity, &catch);
    match failed {
        Ok(Outcome::Error(Error::Exception(error))) => {
            assert!(error.exception().is::<ParseIntError>());
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_critical_exception_is_never_caught() {
    let catch = Catch::new().on::<bearing::exception::CriticalError>();
    let raised = Exception::critical("out of memory");
    let thrown = raised.clone();

    let result = try_catch((), move |_| Err::<i32, _>(thrown), &catch);
    match result {
        Err(exception) => assert!(exception.ptr_eq(&raised)),
        Ok(exceptional) => panic!("critical exception was caught: {:?}", exceptional),
    }
}

#[test]
fn test_exceptional_to_outcome() {
    let boom = Exception::msg("boom");
    let outcome = boom.clone().to_exceptional_failure::<i32>().to_outcome();
    assert_eq!(outcome, Outcome::Error(Error::exception(boom)));
    assert_eq!(5_i32.to_exceptional_success().to_outcome(), Outcome::Ok(5));
}
