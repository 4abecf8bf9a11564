//! Exception Guard Example
//!
//! Guards fallible code with a `Catch` list.
//! Shows practical patterns including:
//! - `try_catch` into `Exceptional` for listed exception types
//! - `validate::try_catch` to land caught exceptions in the `Outcome` error channel
//! - unlisted exceptions handed back as `Err` for `?` to propagate
//! - `CriticalError` escaping every catch list and catch-all handler
//!
//! Run with `--features tracing` to see the catch and re-raise events.

use bearing::exception::CriticalError;
use bearing::prelude::*;
use bearing::validate;
use std::num::ParseIntError;

const BUFFER_LIMIT: usize = 64 * 1024;

// ==================== Fallible operations ====================

fn read_port(raw: &str) -> Result<u16, Exception> {
    Ok(raw.trim().parse::<u16>()?)
}

fn allocate_buffer(size: usize) -> Result<Vec<u8>, Exception> {
    if size > BUFFER_LIMIT {
        return Err(Exception::critical(format!("cannot allocate {} bytes", size)));
    }
    Ok(vec![0; size])
}

fn port_catch() -> Catch {
    Catch::new().on::<ParseIntError>().on::<std::io::Error>()
}

// ==================== Exceptional ====================

/// Example 1: listed exceptions become a `Failure`
fn example_exceptional() {
    println!("\n=== Example 1: try_catch into Exceptional ===");

    let catch = port_catch();
    println!("  catching: {:?}", catch.type_names().collect::<Vec<_>>());

    for raw in ["8080", "http"] {
        match try_catch(raw, read_port, &catch) {
            Ok(Exceptional::Success(port)) => println!("  {:?} -> port {}", raw, port),
            Ok(Exceptional::Failure(exception)) => {
                println!("  {:?} -> caught: {}", raw, exception)
            }
            Err(exception) => println!("  {:?} -> escaped: {}", raw, exception),
        }
    }
}

// ==================== Outcome bridge ====================

/// Example 2: caught exceptions join the `Outcome` error channel
fn example_outcome_bridge() {
    println!("\n=== Example 2: try_catch into Outcome ===");

    let catch = port_catch();
    for raw in ["443", "70000"] {
        let described = validate::try_catch(raw, |raw| read_port(raw).map(Outcome::ok), &catch)
            .map(|outcome| {
                outcome
                    .check(
                        |port| *port >= 1024,
                        Error::validation("privileged port", Some("port")),
                    )
                    .match_with(
                        |port| format!("port {}", port),
                        |error| format!("error: {}", error),
                    )
            });
        match described {
            Ok(text) => println!("  {:?} -> {}", raw, text),
            Err(exception) => println!("  {:?} -> escaped: {}", raw, exception),
        }
    }
}

// ==================== Propagation ====================

#[derive(Debug)]
struct Settings {
    port: u16,
    buffer: usize,
}

/// Listed exceptions become errors; anything else leaves through `?`.
fn load_settings(raw_port: &str, buffer: usize) -> Result<Outcome<Settings>, Exception> {
    let catch = port_catch();
    let port = validate::try_catch(raw_port, |raw| read_port(raw).map(Outcome::ok), &catch)?;
    let buffer = validate::try_catch(
        buffer,
        |size| allocate_buffer(size).map(|bytes| Outcome::ok(bytes.len())),
        &catch,
    )?;

    Ok(port.bind(|port| buffer.map(|buffer| Settings { port, buffer })))
}

/// Example 3: unlisted and critical exceptions propagate
fn example_propagation() {
    println!("\n=== Example 3: Propagation ===");

    let cases = [("8080", 4096), ("not-a-port", 4096), ("8080", BUFFER_LIMIT * 16)];
    for (raw_port, buffer) in cases {
        match load_settings(raw_port, buffer) {
            Ok(Outcome::Ok(settings)) => println!("  loaded {:?}", settings),
            Ok(Outcome::Error(error)) => println!("  invalid settings: {}", error),
            Err(exception) => println!(
                "  escaped (critical: {}): {}",
                exception.is_critical(),
                exception
            ),
        }
    }

    let unlisted = validate::try_catch(
        (),
        |_| Err::<Outcome<u16>, _>(Exception::msg("disk unplugged")),
        &port_catch(),
    );
    println!("  unlisted exception escaped: {}", unlisted.is_err());
}

// ==================== Critical ====================

/// Example 4: nothing converts a critical exception
fn example_critical() {
    println!("\n=== Example 4: Critical exceptions ===");

    let listing_critical = Catch::new().on::<CriticalError>();
    let escaped = try_catch(BUFFER_LIMIT + 1, allocate_buffer, &listing_critical);
    println!("  listed CriticalError still escapes: {}", escaped.is_err());

    let catch_all = |exception: &Exception| Maybe::some(Error::exception(exception.clone()));
    let escaped = validate::try_catch_with(
        BUFFER_LIMIT + 1,
        |size| allocate_buffer(size).map(|bytes| Outcome::ok(bytes.len())),
        catch_all,
    );
    match escaped {
        Ok(outcome) => println!("  unexpectedly handled: {:?}", outcome),
        Err(exception) => println!("  catch-all handler bypassed: {}", exception),
    }
}

// ==================== Main ====================

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("======================================");
    println!("       Exception Guard Example        ");
    println!("======================================");

    example_exceptional();
    example_outcome_bridge();
    example_propagation();
    example_critical();

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
