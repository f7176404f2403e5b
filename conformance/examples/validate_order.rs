//! Example: Checking orders returned by an exchange integration
//!
//! This example demonstrates how to:
//! 1. Load harness configuration
//! 2. Validate a single order record parsed from JSON
//! 3. Check an order listing with an OrderSuite
//! 4. Inspect the first violated invariant
//!
//! Run with `RUST_LOG=debug` to see the suite's log output.

use ag_conformance::{
    now_millis, validate_order, ConformanceConfig, Iso8601, OrderListing, OrderRecord, OrderSuite,
    TimestampFormatter,
};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    ag_conformance::init_tracing();

    println!("=== Order Conformance Example ===\n");

    // 1. Configuration
    println!("1. Loading configuration...");
    let config = ConformanceConfig::from_yaml(
        r#"
validator:
  min_timestamp: 1230940800000
listing_checks: true
"#,
    )?;
    println!("   Timestamp floor: {}\n", config.validator.min_timestamp);

    // 2. A single order, as fetchOrder would return it
    println!("2. Validating a single order...");
    let timestamp = 1_609_459_200_000;
    let order = OrderRecord::from_value(json!({
        "id": "123",
        "timestamp": timestamp,
        "datetime": Iso8601.iso8601(timestamp),
        "lastTradeTimestamp": null,
        "status": "closed",
        "symbol": "BTC/USD",
        "type": "limit",
        "side": "buy",
        "price": 29000,
        "amount": 0.5,
        "filled": 0.5,
        "remaining": 0,
        "trades": [],
        "fee": {"cost": 0, "currency": ""},
        "info": {"raw": "..."}
    }))?;

    let now = now_millis();
    match validate_order(&Iso8601, &order, "BTC/USD", now) {
        Ok(()) => println!("   ✓ Order 123 conforms\n"),
        Err(violation) => println!("   ✗ {}\n", violation),
    }

    // 3. A listing, as fetchOpenOrders would return it
    println!("3. Checking an open orders listing...");
    let suite = OrderSuite::with_config("example", Iso8601, "BTC/USD", config);

    let mut open = order.clone();
    open.status = "open".to_string().into();
    let mut broken = open.clone();
    broken.price = (-1.0).into();

    match suite.check_orders(OrderListing::Open, &[open.clone()], now) {
        Ok(count) => println!("   ✓ {} order(s) conform\n", count),
        Err(e) => println!("   ✗ {}\n", e),
    }

    // 4. The first failing order stops the batch
    println!("4. Checking a listing with a broken order...");
    match suite.check_orders(OrderListing::Open, &[open, broken], now) {
        Ok(count) => println!("   ✓ {} order(s) conform\n", count),
        Err(e) => {
            println!("   ✗ {}", e);
            if let Some(violation) = e.violation() {
                println!("     failed check: {}", violation.check);
            }
        }
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
