//! Order Validation Example
//!
//! Turns raw order-form input into a validated order line.
//! Shows practical patterns including:
//! - `to_outcome_is_not_null` for required fields
//! - `as_token` and `as_decimal` for trimming and parsing text
//! - `bind`/`check`/`check_not` to chain rules on the happy path
//! - `match_or_add_error` to collect every failure into one aggregate

use bearing::prelude::*;
use bearing::validate::{to_outcome_is_not_empty, to_outcome_is_not_null};
use rust_decimal::Decimal;
use uuid::Uuid;

// ==================== Domain ====================

/// Raw input, exactly as the form submitted it.
struct OrderForm<'a> {
    customer_id: Uuid,
    sku: Option<&'a str>,
    quantity: Option<&'a str>,
    unit_price: Option<&'a str>,
}

#[derive(Debug)]
struct OrderLine {
    customer_id: Uuid,
    sku: String,
    quantity: Decimal,
    unit_price: Decimal,
}

impl OrderLine {
    fn total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

// ==================== Field rules ====================

fn parse_sku(raw: Option<&str>) -> Outcome<String> {
    to_outcome_is_not_null(raw, Error::null_reference(Some("sku")))
        .bind(|text| {
            as_token(Some(text)).to_outcome(Error::validation("sku is blank", Some("sku")))
        })
        .check(|sku| sku.len() <= 12, Error::invalid_format(Some("sku")))
}

fn parse_amount(raw: Option<&str>, field: &str) -> Outcome<Decimal> {
    to_outcome_is_not_null(raw, Error::null_reference(Some(field)))
        .bind(|text| text.as_decimal().to_outcome(Error::invalid_format(Some(field))))
        .check_not(
            |amount| amount.is_sign_negative(),
            Error::validation("must not be negative", Some(field)),
        )
}

// ==================== Whole form ====================

/// Validate every field, reporting all failures at once.
fn validate(form: &OrderForm) -> Outcome<OrderLine> {
    let mut errors = Vec::new();

    let customer_id = to_outcome_is_not_empty(
        form.customer_id,
        Error::null_reference(Some("customer_id")),
    )
    .match_or_add_error(&mut errors);
    let sku = parse_sku(form.sku).match_or_add_error(&mut errors);
    let quantity = parse_amount(form.quantity, "quantity").match_or_add_error(&mut errors);
    let unit_price = parse_amount(form.unit_price, "unit_price").match_or_add_error(&mut errors);

    if errors.is_empty() {
        Outcome::ok(OrderLine {
            customer_id,
            sku,
            quantity,
            unit_price,
        })
    } else {
        Outcome::error(errors.to_aggregate_error())
    }
}

fn report(label: &str, form: &OrderForm) {
    println!("\n=== {} ===", label);

    let summary = validate(form)
        .check(
            |line| line.total() <= Decimal::from(10_000),
            Error::validation("order exceeds credit limit", Some("total")),
        )
        .match_with(
            |line| {
                format!(
                    "accepted {} x {} for {} (total {})",
                    line.quantity,
                    line.sku,
                    line.customer_id,
                    line.total()
                )
            },
            |error| format!("rejected: {}", error),
        );

    println!("  {}", summary);
}

// ==================== Main ====================

fn main() {
    println!("======================================");
    println!("      Order Validation Example        ");
    println!("======================================");

    let customer = Uuid::from_u128(0x6f1c_29d4_8a5e_4b07_9c3d_1e2f_3a4b_5c6d);

    report(
        "Example 1: Valid order",
        &OrderForm {
            customer_id: customer,
            sku: Some("  KB-104  "),
            quantity: Some("3"),
            unit_price: Some("49.90"),
        },
    );

    report(
        "Example 2: Every field wrong",
        &OrderForm {
            customer_id: Uuid::nil(),
            sku: Some("   "),
            quantity: Some("three"),
            unit_price: None,
        },
    );

    report(
        "Example 3: Negative price",
        &OrderForm {
            customer_id: customer,
            sku: Some("MON-27"),
            quantity: Some("1"),
            unit_price: Some("-199.00"),
        },
    );

    report(
        "Example 4: Over the limit",
        &OrderForm {
            customer_id: customer,
            sku: Some("SRV-RACK"),
            quantity: Some("4"),
            unit_price: Some("3200"),
        },
    );

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
