//! Harness-facing order checks
//!
//! An [`OrderSuite`] binds the validator to one exchange integration and one symbol,
//! and checks the orders returned by single-order fetches and order listings. Batches
//! stop at the first failing order; collecting failures across orders or exchanges is
//! left to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ConformanceConfig;
use crate::error::{ConformanceError, ConformanceResult};
use crate::order::{OrderRecord, OrderStatus, Timestamp};
use crate::time::TimestampFormatter;
use crate::validator::OrderValidator;

/// Kind of order listing a batch was returned by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderListing {
    /// A single fetched order
    Single,
    /// All orders regardless of status
    All,
    /// Open orders only
    Open,
    /// Closed and canceled orders only
    Closed,
}

impl OrderListing {
    /// Check if an order with the given status may appear in this listing
    pub fn allows(&self, status: OrderStatus) -> bool {
        match self {
            OrderListing::Single | OrderListing::All => true,
            OrderListing::Open => status == OrderStatus::Open,
            OrderListing::Closed => {
                matches!(status, OrderStatus::Closed | OrderStatus::Canceled)
            }
        }
    }

    /// Listing name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderListing::Single => "single",
            OrderListing::All => "all",
            OrderListing::Open => "open",
            OrderListing::Closed => "closed",
        }
    }
}

impl std::fmt::Display for OrderListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order checks for one exchange integration and symbol
pub struct OrderSuite {
    /// Exchange name, used in log output
    exchange: String,

    /// Exchange-owned ISO-8601 rendering
    formatter: Box<dyn TimestampFormatter>,

    /// Symbol under test
    symbol: String,

    /// Order validator
    validator: OrderValidator,

    /// Configuration
    config: ConformanceConfig,
}

impl OrderSuite {
    /// Create a suite with default configuration
    pub fn new(
        exchange: impl Into<String>,
        formatter: impl TimestampFormatter + 'static,
        symbol: impl Into<String>,
    ) -> Self {
        Self::with_config(exchange, formatter, symbol, ConformanceConfig::default())
    }

    /// Create a suite with custom configuration
    pub fn with_config(
        exchange: impl Into<String>,
        formatter: impl TimestampFormatter + 'static,
        symbol: impl Into<String>,
        config: ConformanceConfig,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            formatter: Box::new(formatter),
            symbol: symbol.into(),
            validator: OrderValidator::with_config(config.validator.clone()),
            config,
        }
    }

    /// Exchange name
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Symbol under test
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Active configuration
    pub fn config(&self) -> &ConformanceConfig {
        &self.config
    }

    /// Check a single fetched order
    pub fn check_order(&self, order: &OrderRecord, now: Timestamp) -> ConformanceResult<()> {
        self.validator
            .validate(&*self.formatter, order, &self.symbol, now)
            .map_err(|violation| {
                warn!(
                    exchange = %self.exchange,
                    symbol = %self.symbol,
                    order_id = %order.display_id(),
                    check = %violation.check,
                    "Order failed conformance: {}",
                    violation
                );
                ConformanceError::InvariantViolation(violation)
            })
    }

    /// Check every order of a listing, stopping at the first failure
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of orders checked
    /// * `Err(ConformanceError)` - First failing order with its position in the batch
    pub fn check_orders(
        &self,
        listing: OrderListing,
        orders: &[OrderRecord],
        now: Timestamp,
    ) -> ConformanceResult<usize> {
        debug!(
            exchange = %self.exchange,
            symbol = %self.symbol,
            listing = %listing,
            count = orders.len(),
            "Checking orders"
        );

        for (index, order) in orders.iter().enumerate() {
            if let Err(violation) =
                self.validator
                    .validate(&*self.formatter, order, &self.symbol, now)
            {
                warn!(
                    exchange = %self.exchange,
                    symbol = %self.symbol,
                    listing = %listing,
                    index,
                    order_id = %order.display_id(),
                    check = %violation.check,
                    "Order failed conformance: {}",
                    violation
                );
                return Err(ConformanceError::OrderViolation {
                    index,
                    order_id: order.display_id(),
                    violation,
                });
            }

            if self.config.listing_checks {
                self.check_listing_status(listing, index, order)?;
            }
        }

        info!(
            exchange = %self.exchange,
            symbol = %self.symbol,
            listing = %listing,
            count = orders.len(),
            "Orders passed conformance"
        );

        Ok(orders.len())
    }

    fn check_listing_status(
        &self,
        listing: OrderListing,
        index: usize,
        order: &OrderRecord,
    ) -> ConformanceResult<()> {
        let status = order
            .status
            .as_present()
            .and_then(|status| OrderStatus::from_wire(status));

        match status {
            Some(status) if listing.allows(status) => Ok(()),
            _ => {
                let status = order.status.describe();
                warn!(
                    exchange = %self.exchange,
                    listing = %listing,
                    index,
                    status = %status,
                    "Order status does not match listing"
                );
                Err(ConformanceError::ListingMismatch {
                    index,
                    order_id: order.display_id(),
                    listing: listing.to_string(),
                    status,
                })
            }
        }
    }
}

impl std::fmt::Debug for OrderSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSuite")
            .field("exchange", &self.exchange)
            .field("symbol", &self.symbol)
            .field("config", &self.config)
            .finish()
    }
}
