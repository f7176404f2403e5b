//! # ag-conformance: Order Conformance Validator
//!
//! This library checks order records returned by exchange integrations against one
//! shared contract, so a conformance test harness can exercise many exchanges the
//! same way.
//!
//! ## Core Components
//!
//! - **OrderValidator**: Ordered, fail-fast invariant checks for a single order
//! - **OrderRecord**: Unified order structure with explicit per-key state
//! - **Truthy**: Truthiness predicate gating the conditional checks
//! - **TimestampFormatter**: Exchange-owned ISO-8601 rendering, injected by the caller
//! - **OrderSuite**: Harness helpers for single orders and order listings
//!
//! ## Example Usage
//!
//! ```rust
//! use ag_conformance::{validate_order, Check, Iso8601, OrderRecord};
//! use serde_json::json;
//!
//! let order = OrderRecord::from_value(json!({
//!     "id": "123",
//!     "timestamp": 1609459200000_i64,
//!     "datetime": "2021-01-01T00:00:00.000Z",
//!     "lastTradeTimestamp": null,
//!     "status": "closed",
//!     "symbol": "BTC/USD",
//!     "type": "limit",
//!     "side": "buy",
//!     "price": -1,
//!     "amount": 0.5,
//!     "info": {"raw": "..."}
//! }))
//! .unwrap();
//!
//! let violation = validate_order(&Iso8601, &order, "BTC/USD", 1_700_000_000_000).unwrap_err();
//! assert_eq!(violation.check, Check::PricePositive);
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod harness;
pub mod order;
pub mod time;
pub mod truthy;
pub mod validator;

// Re-export main types
pub use config::{ConformanceConfig, ValidatorConfig, FIRST_BLOCK_TIMESTAMP};
pub use error::{ConformanceError, ConformanceResult, Violation, ViolationKind};
pub use harness::{OrderListing, OrderSuite};
pub use order::{Fee, Field, OrderRecord, OrderRecordBuilder, OrderStatus, Side, Timestamp};
pub use time::{now_millis, Iso8601, TimestampFormatter};
pub use truthy::Truthy;
pub use validator::{validate_json, validate_order, Check, OrderValidator};

// Initialize tracing
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();
}
