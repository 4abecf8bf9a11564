//! Async Lookup Example
//!
//! Chains pending `Maybe` and `Outcome` values on a tokio runtime.
//! Shows practical patterns including:
//! - `to_outcome_with_async` to give a missing record an error
//! - `bind_await` to call the next async service only on success
//! - `tap_or_await` for async logging on either branch
//! - `to_outcome_if_await` for an async precondition
//! - `match_with_await` to collapse into a final message

use bearing::prelude::*;
use rust_decimal::Decimal;
use std::time::Duration;

// ==================== Services ====================

#[derive(Debug, Clone)]
struct Customer {
    id: u32,
    name: String,
    tier: &'static str,
}

async fn find_customer(id: u32) -> Maybe<Customer> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    match id {
        1 => Maybe::some(Customer {
            id,
            name: "Ada".to_string(),
            tier: "gold",
        }),
        2 => Maybe::some(Customer {
            id,
            name: "Linus".to_string(),
            tier: "trial",
        }),
        _ => Maybe::None,
    }
}

async fn credit_limit(tier: &'static str) -> Outcome<Decimal> {
    tokio::task::yield_now().await;
    match tier {
        "gold" => Outcome::ok(Decimal::from(5_000)),
        "silver" => Outcome::ok(Decimal::from(1_000)),
        _ => Outcome::error(Error::validation("tier has no credit line", Some("tier"))),
    }
}

async fn payments_open() -> bool {
    tokio::time::sleep(Duration::from_millis(1)).await;
    true
}

// ==================== Pipeline ====================

async fn authorize(customer_id: u32, amount: Decimal) -> String {
    async { amount }
        .to_outcome_if_await(
            |_| payments_open(),
            Error::validation("payments are closed", Some("amount")),
        )
        .bind_await(|amount| async move {
            find_customer(customer_id)
                .to_outcome_with_async(|| Error::null_reference(Some("customer")))
                .map_async(|customer| (customer, amount))
                .await
        })
        .tap_or_await(
            |(customer, _)| async move {
                println!("  found customer {} ({})", customer.id, customer.name)
            },
            |error| async move { println!("  lookup failed: {}", error) },
        )
        .bind_await(|(customer, amount)| async move {
            credit_limit(customer.tier)
                .await
                .map(|limit| (customer, amount, limit))
        })
        .check_with_async(
            |(_, amount, limit)| amount <= limit,
            || Error::validation("credit limit exceeded", Some("amount")),
        )
        .match_with_await(
            |(customer, amount, _)| async move {
                format!("authorized {} for {}", amount, customer.name)
            },
            |error| async move { format!("declined: {}", error) },
        )
        .await
}

// ==================== Main ====================

#[tokio::main]
async fn main() {
    println!("======================================");
    println!("        Async Lookup Example          ");
    println!("======================================");

    let requests = [
        ("Example 1: Gold customer", 1, Decimal::from(250)),
        ("Example 2: Over the limit", 1, Decimal::from(9_000)),
        ("Example 3: Trial tier", 2, Decimal::from(20)),
        ("Example 4: Unknown customer", 42, Decimal::from(5)),
    ];

    for (label, customer_id, amount) in requests {
        println!("\n=== {} ===", label);
        println!("  {}", authorize(customer_id, amount).await);
    }

    println!("\n=== Example 5: Concurrent lookups ===");
    let (first, second) = tokio::join!(
        find_customer(1).map_async(|c| c.name).value_or_async("nobody".to_string()),
        find_customer(7).map_async(|c| c.name).value_or_async("nobody".to_string()),
    );
    println!("  {} / {}", first, second);

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
