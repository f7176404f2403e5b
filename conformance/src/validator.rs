//! Order conformance validation
//!
//! This module checks an order record returned by an exchange integration against the
//! unified order contract. Checks run in a fixed order and validation stops at the
//! first violated invariant.
//!
//! Mandatory fields are always checked. `filled`, `remaining`, `trades` and `fee` are
//! only checked when they are truthy (see [`crate::truthy`]), so an exchange that omits
//! them or reports zero is not penalized. `lastTradeTimestamp` is different: its key
//! must exist, but its value may be null.

use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::error::{ConformanceResult, Violation, ViolationKind};
use crate::order::{json_type_name, whole_millis, Field, OrderRecord, OrderStatus, Side, Timestamp};
use crate::time::TimestampFormatter;
use crate::truthy::Truthy;

/// A single invariant of the order contract, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Record is not empty
    OrderPresent,
    /// `id` is a string
    IdIsString,
    /// `timestamp` is numeric
    TimestampIsNumeric,
    /// `timestamp` is after the configured floor
    TimestampAfterFloor,
    /// `timestamp` is before `now`
    TimestampBeforeNow,
    /// `lastTradeTimestamp` key exists
    LastTradeTimestampKey,
    /// `datetime` equals the exchange rendering of `timestamp`
    DatetimeMatches,
    /// `status` is open, closed or canceled
    StatusAllowed,
    /// `symbol` equals the symbol under test
    SymbolMatches,
    /// `type` is a string
    TypeIsString,
    /// `side` is buy or sell
    SideAllowed,
    /// `price` is a positive number
    PricePositive,
    /// `amount` is a non-negative number
    AmountNonNegative,
    /// truthy `filled` lies in `[0, amount]`
    FilledWithinAmount,
    /// truthy `remaining` lies in `[0, amount]`
    RemainingWithinAmount,
    /// truthy `trades` is a sequence
    TradesIsSequence,
    /// truthy `fee` has a numeric cost and, when charged, a currency
    FeeWellFormed,
    /// `info` is truthy
    InfoPresent,
}

impl Check {
    /// Every check in evaluation order
    pub const ALL: [Check; 18] = [
        Check::OrderPresent,
        Check::IdIsString,
        Check::TimestampIsNumeric,
        Check::TimestampAfterFloor,
        Check::TimestampBeforeNow,
        Check::LastTradeTimestampKey,
        Check::DatetimeMatches,
        Check::StatusAllowed,
        Check::SymbolMatches,
        Check::TypeIsString,
        Check::SideAllowed,
        Check::PricePositive,
        Check::AmountNonNegative,
        Check::FilledWithinAmount,
        Check::RemainingWithinAmount,
        Check::TradesIsSequence,
        Check::FeeWellFormed,
        Check::InfoPresent,
    ];

    /// 1-based position in evaluation order
    pub fn position(&self) -> usize {
        *self as usize + 1
    }

    /// Stable snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Check::OrderPresent => "order_present",
            Check::IdIsString => "id_is_string",
            Check::TimestampIsNumeric => "timestamp_is_numeric",
            Check::TimestampAfterFloor => "timestamp_after_floor",
            Check::TimestampBeforeNow => "timestamp_before_now",
            Check::LastTradeTimestampKey => "last_trade_timestamp_key",
            Check::DatetimeMatches => "datetime_matches",
            Check::StatusAllowed => "status_allowed",
            Check::SymbolMatches => "symbol_matches",
            Check::TypeIsString => "type_is_string",
            Check::SideAllowed => "side_allowed",
            Check::PricePositive => "price_positive",
            Check::AmountNonNegative => "amount_non_negative",
            Check::FilledWithinAmount => "filled_within_amount",
            Check::RemainingWithinAmount => "remaining_within_amount",
            Check::TradesIsSequence => "trades_is_sequence",
            Check::FeeWellFormed => "fee_well_formed",
            Check::InfoPresent => "info_present",
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.position(), self.name())
    }
}

/// Order conformance validator
#[derive(Debug, Clone, Default)]
pub struct OrderValidator {
    config: ValidatorConfig,
}

impl OrderValidator {
    /// Create a validator with the default timestamp floor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator from configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate an order record, stopping at the first violated invariant
    ///
    /// # Arguments
    /// * `exchange` - Provides the canonical ISO-8601 rendering of timestamps
    /// * `order` - The record returned by the exchange
    /// * `symbol` - Symbol the order is expected to belong to
    /// * `now` - Current time in epoch milliseconds
    pub fn validate<E>(
        &self,
        exchange: &E,
        order: &OrderRecord,
        symbol: &str,
        now: Timestamp,
    ) -> Result<(), Violation>
    where
        E: TimestampFormatter + ?Sized,
    {
        Check::ALL
            .iter()
            .try_for_each(|check| self.check(*check, exchange, order, symbol, now))
    }

    /// Evaluate a single check in isolation
    pub fn check<E>(
        &self,
        check: Check,
        exchange: &E,
        order: &OrderRecord,
        symbol: &str,
        now: Timestamp,
    ) -> Result<(), Violation>
    where
        E: TimestampFormatter + ?Sized,
    {
        match check {
            Check::OrderPresent => {
                if order.is_falsy() {
                    return Err(Violation::new(check, "order", ViolationKind::Falsy));
                }
            }
            Check::IdIsString => {
                require(check, "id", "string", &order.id)?;
            }
            Check::TimestampIsNumeric => {
                require(check, "timestamp", "number", &order.timestamp)?;
            }
            Check::TimestampAfterFloor => {
                let timestamp = *require(check, "timestamp", "number", &order.timestamp)?;
                if !(timestamp > self.config.min_timestamp as f64) {
                    return Err(out_of_range(
                        check,
                        "timestamp",
                        timestamp,
                        format!("> {}", self.config.min_timestamp),
                    ));
                }
            }
            Check::TimestampBeforeNow => {
                let timestamp = *require(check, "timestamp", "number", &order.timestamp)?;
                if !(timestamp < now as f64) {
                    return Err(out_of_range(check, "timestamp", timestamp, format!("< {}", now)));
                }
            }
            Check::LastTradeTimestampKey => {
                if order.last_trade_timestamp.is_absent() {
                    return Err(Violation::new(
                        check,
                        "lastTradeTimestamp",
                        ViolationKind::Missing,
                    ));
                }
            }
            Check::DatetimeMatches => {
                let timestamp = *require(check, "timestamp", "number", &order.timestamp)?;
                // fractional milliseconds have no rendering
                let expected = whole_millis(timestamp).and_then(|ms| exchange.iso8601(ms));
                match (&order.datetime, expected) {
                    (Field::Absent, _) => {
                        return Err(Violation::new(check, "datetime", ViolationKind::Missing));
                    }
                    (Field::Present(datetime), Some(expected)) if *datetime == expected => {}
                    (datetime, expected) => {
                        return Err(Violation::new(
                            check,
                            "datetime",
                            ViolationKind::Mismatch {
                                expected: expected
                                    .map(|e| format!("{:?}", e))
                                    .unwrap_or_else(|| "no rendering".to_string()),
                                found: datetime.describe(),
                            },
                        ));
                    }
                }
            }
            Check::StatusAllowed => {
                let status = require(check, "status", "string", &order.status)?;
                if OrderStatus::from_wire(status).is_none() {
                    return Err(not_allowed(check, "status", status, OrderStatus::NAMES));
                }
            }
            Check::SymbolMatches => match &order.symbol {
                Field::Absent => {
                    return Err(Violation::new(check, "symbol", ViolationKind::Missing));
                }
                Field::Present(actual) if actual == symbol => {}
                actual => {
                    return Err(Violation::new(
                        check,
                        "symbol",
                        ViolationKind::Mismatch {
                            expected: format!("{:?}", symbol),
                            found: actual.describe(),
                        },
                    ));
                }
            },
            Check::TypeIsString => {
                require(check, "type", "string", &order.order_type)?;
            }
            Check::SideAllowed => {
                let side = require(check, "side", "string", &order.side)?;
                if Side::from_wire(side).is_none() {
                    return Err(not_allowed(check, "side", side, Side::NAMES));
                }
            }
            Check::PricePositive => {
                let price = *require(check, "price", "number", &order.price)?;
                if !(price > 0.0) {
                    return Err(out_of_range(check, "price", price, "> 0".to_string()));
                }
            }
            Check::AmountNonNegative => {
                let amount = *require(check, "amount", "number", &order.amount)?;
                if !(amount >= 0.0) {
                    return Err(out_of_range(check, "amount", amount, ">= 0".to_string()));
                }
            }
            Check::FilledWithinAmount => {
                within_amount(check, "filled", &order.filled, &order.amount)?;
            }
            Check::RemainingWithinAmount => {
                within_amount(check, "remaining", &order.remaining, &order.amount)?;
            }
            Check::TradesIsSequence => {
                if order.trades.is_truthy() {
                    require(check, "trades", "array", &order.trades)?;
                }
            }
            Check::FeeWellFormed => {
                if order.fee.is_truthy() {
                    let fee = require(check, "fee", "object", &order.fee)?;
                    let cost = *require(check, "fee.cost", "number", &fee.cost)?;
                    if cost != 0.0 {
                        let currency = require(check, "fee.currency", "string", &fee.currency)?;
                        if currency.is_falsy() {
                            return Err(Violation::new(
                                check,
                                "fee.currency",
                                ViolationKind::Falsy,
                            ));
                        }
                    }
                }
            }
            Check::InfoPresent => match &order.info {
                Field::Absent => {
                    return Err(Violation::new(check, "info", ViolationKind::Missing));
                }
                info if info.is_falsy() => {
                    return Err(Violation::new(check, "info", ViolationKind::Falsy));
                }
                _ => {}
            },
        }

        Ok(())
    }
}

/// Validate an order record with the default configuration
///
/// Returns the first violated invariant, if any.
pub fn validate_order<E>(
    exchange: &E,
    order: &OrderRecord,
    symbol: &str,
    now: Timestamp,
) -> Result<(), Violation>
where
    E: TimestampFormatter + ?Sized,
{
    OrderValidator::new().validate(exchange, order, symbol, now)
}

/// Parse an order record from JSON text and validate it with the default configuration
pub fn validate_json<E>(
    exchange: &E,
    json: &str,
    symbol: &str,
    now: Timestamp,
) -> ConformanceResult<()>
where
    E: TimestampFormatter + ?Sized,
{
    let order = OrderRecord::from_json(json)?;
    validate_order(exchange, &order, symbol, now)?;
    Ok(())
}

/// Borrow the typed value of a field or report why there is none
fn require<'a, T>(
    check: Check,
    field: &'static str,
    expected: &'static str,
    value: &'a Field<T>,
) -> Result<&'a T, Violation> {
    match value {
        Field::Present(typed) => Ok(typed),
        Field::Absent => Err(Violation::new(check, field, ViolationKind::Missing)),
        Field::Null => Err(Violation::new(
            check,
            field,
            ViolationKind::WrongType {
                expected,
                found: "null".to_string(),
            },
        )),
        Field::Mismatch(raw) => Err(Violation::new(
            check,
            field,
            ViolationKind::WrongType {
                expected,
                found: json_type_name(raw).to_string(),
            },
        )),
    }
}

fn out_of_range(
    check: Check,
    field: &'static str,
    value: impl std::fmt::Display,
    constraint: String,
) -> Violation {
    Violation::new(
        check,
        field,
        ViolationKind::OutOfRange {
            value: value.to_string(),
            constraint,
        },
    )
}

fn not_allowed(
    check: Check,
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Violation {
    Violation::new(
        check,
        field,
        ViolationKind::NotAllowed {
            value: value.to_string(),
            allowed,
        },
    )
}

/// Truthy quantities must be numbers in `[0, amount]`
fn within_amount(
    check: Check,
    field: &'static str,
    quantity: &Field<f64>,
    amount: &Field<f64>,
) -> Result<(), Violation> {
    if quantity.is_falsy() {
        return Ok(());
    }

    let quantity = *require(check, field, "number", quantity)?;
    let amount = *require(check, "amount", "number", amount)?;
    if !(quantity >= 0.0 && quantity <= amount) {
        return Err(out_of_range(
            check,
            field,
            quantity,
            format!("within [0, {}]", amount),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Fee;
    use crate::time::Iso8601;
    use serde_json::json;

    const NOW: Timestamp = 1_700_000_000_000;
    const TS: Timestamp = 1_609_459_200_000;

    fn create_test_order() -> OrderRecord {
        OrderRecord::builder()
            .id("123")
            .timestamp(TS)
            .datetime("2021-01-01T00:00:00.000Z")
            .last_trade_timestamp(None)
            .status("closed")
            .symbol("BTC/USD")
            .order_type("limit")
            .side("buy")
            .price(29000.0)
            .amount(0.5)
            .filled(0.5)
            .remaining(0.0)
            .trades(vec![])
            .fee(Fee::new(0.0, ""))
            .info(json!({"raw": "..."}))
            .build()
    }

    fn failed_check(order: &OrderRecord) -> Option<Check> {
        validate_order(&Iso8601, order, "BTC/USD", NOW)
            .err()
            .map(|violation| violation.check)
    }

    #[test]
    fn test_valid_order() {
        assert_eq!(failed_check(&create_test_order()), None);
    }

    #[test]
    fn test_check_order_and_positions() {
        assert_eq!(Check::ALL.len(), 18);
        for (index, check) in Check::ALL.iter().enumerate() {
            assert_eq!(check.position(), index + 1);
        }
        assert_eq!(Check::PricePositive.to_string(), "#12 price_positive");
    }

    #[test]
    fn test_empty_order() {
        assert_eq!(failed_check(&OrderRecord::default()), Some(Check::OrderPresent));
    }

    #[test]
    fn test_id_must_be_string() {
        let mut order = create_test_order();
        order.id = Field::Mismatch(json!(123));

        let violation = validate_order(&Iso8601, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.check, Check::IdIsString);
        assert_eq!(
            violation.kind,
            ViolationKind::WrongType {
                expected: "string",
                found: "number".to_string()
            }
        );
    }

    #[test]
    fn test_timestamp_floor_is_exclusive() {
        let mut order = create_test_order();
        order.timestamp = Field::Present(1_230_940_800_000.0);
        assert_eq!(failed_check(&order), Some(Check::TimestampAfterFloor));

        order.timestamp = Field::Present(1_230_940_800_001.0);
        order.datetime = Field::Present("2009-01-03T00:00:00.001Z".to_string());
        assert_eq!(failed_check(&order), None);
    }

    #[test]
    fn test_integral_float_timestamp_passes() {
        let mut order = create_test_order();
        order.timestamp = Field::Present(1_609_459_200_000.0);
        assert_eq!(failed_check(&order), None);
    }

    #[test]
    fn test_fractional_timestamp_fails_datetime() {
        let mut order = create_test_order();
        order.timestamp = Field::Present(1_609_459_200_000.5);

        let violation = validate_order(&Iso8601, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.check, Check::DatetimeMatches);
        assert!(matches!(violation.kind, ViolationKind::Mismatch { .. }));
    }

    #[test]
    fn test_nan_timestamp_fails_floor() {
        let mut order = create_test_order();
        order.timestamp = Field::Present(f64::NAN);
        assert_eq!(failed_check(&order), Some(Check::TimestampAfterFloor));
    }

    #[test]
    fn test_timestamp_must_precede_now() {
        let order = create_test_order();
        let violation = validate_order(&Iso8601, &order, "BTC/USD", TS).unwrap_err();
        assert_eq!(violation.check, Check::TimestampBeforeNow);
    }

    #[test]
    fn test_custom_floor() {
        let validator = OrderValidator::with_config(ValidatorConfig {
            min_timestamp: 1_650_000_000_000,
        });
        let result = validator.validate(&Iso8601, &create_test_order(), "BTC/USD", NOW);
        assert_eq!(result.unwrap_err().check, Check::TimestampAfterFloor);
    }

    #[test]
    fn test_last_trade_timestamp_key_required() {
        let mut order = create_test_order();
        order.last_trade_timestamp = Field::Absent;
        assert_eq!(failed_check(&order), Some(Check::LastTradeTimestampKey));

        // any value is fine as long as the key exists
        order.last_trade_timestamp = Field::Mismatch(json!("yesterday"));
        assert_eq!(failed_check(&order), None);
    }

    #[test]
    fn test_datetime_must_match_rendering() {
        let mut order = create_test_order();
        order.datetime = Field::Present("2021-01-01T00:00:00Z".to_string());

        let violation = validate_order(&Iso8601, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.check, Check::DatetimeMatches);
        assert!(matches!(violation.kind, ViolationKind::Mismatch { .. }));
    }

    #[test]
    fn test_datetime_uses_injected_formatter() {
        let order = create_test_order();
        let fake = |_: Timestamp| Some("2021-01-01T00:00:00.000Z".to_string());
        assert!(validate_order(&fake, &order, "BTC/USD", NOW).is_ok());

        let silent = |_: Timestamp| -> Option<String> { None };
        let violation = validate_order(&silent, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.check, Check::DatetimeMatches);
    }

    #[test]
    fn test_status_values() {
        let mut order = create_test_order();
        for status in ["open", "closed", "canceled"] {
            order.status = Field::Present(status.to_string());
            assert_eq!(failed_check(&order), None);
        }

        order.status = Field::Present("cancelled".to_string());
        assert_eq!(failed_check(&order), Some(Check::StatusAllowed));
    }

    #[test]
    fn test_symbol_mismatch() {
        let order = create_test_order();
        let violation = validate_order(&Iso8601, &order, "ETH/USD", NOW).unwrap_err();
        assert_eq!(violation.check, Check::SymbolMatches);
        assert_eq!(
            violation.kind,
            ViolationKind::Mismatch {
                expected: "\"ETH/USD\"".to_string(),
                found: "\"BTC/USD\"".to_string()
            }
        );
    }

    #[test]
    fn test_side_values() {
        let mut order = create_test_order();
        order.side = Field::Present("sell".to_string());
        assert_eq!(failed_check(&order), None);

        order.side = Field::Present("short".to_string());
        assert_eq!(failed_check(&order), Some(Check::SideAllowed));
    }

    #[test]
    fn test_price_must_be_positive() {
        let mut order = create_test_order();
        order.price = Field::Present(-1.0);

        let violation = validate_order(&Iso8601, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.check, Check::PricePositive);
        assert_eq!(violation.field, "price");

        order.price = Field::Present(0.0);
        assert_eq!(failed_check(&order), Some(Check::PricePositive));

        order.price = Field::Present(f64::NAN);
        assert_eq!(failed_check(&order), Some(Check::PricePositive));
    }

    #[test]
    fn test_zero_amount_allowed() {
        let mut order = create_test_order();
        order.amount = Field::Present(0.0);
        order.filled = Field::Present(0.0);
        assert_eq!(failed_check(&order), None);

        order.amount = Field::Present(-0.1);
        assert_eq!(failed_check(&order), Some(Check::AmountNonNegative));
    }

    #[test]
    fn test_filled_law() {
        let mut order = create_test_order();
        order.amount = Field::Present(1.0);

        order.filled = Field::Present(0.0);
        assert_eq!(failed_check(&order), None);

        order.filled = Field::Present(0.5);
        assert_eq!(failed_check(&order), None);

        order.filled = Field::Present(2.0);
        assert_eq!(failed_check(&order), Some(Check::FilledWithinAmount));

        order.filled = Field::Present(-0.5);
        assert_eq!(failed_check(&order), Some(Check::FilledWithinAmount));

        order.filled = Field::Mismatch(json!("0.5"));
        assert_eq!(failed_check(&order), Some(Check::FilledWithinAmount));

        order.filled = Field::Null;
        assert_eq!(failed_check(&order), None);
    }

    #[test]
    fn test_remaining_law() {
        let mut order = create_test_order();
        order.remaining = Field::Present(0.25);
        assert_eq!(failed_check(&order), None);

        order.remaining = Field::Present(0.75);
        assert_eq!(failed_check(&order), Some(Check::RemainingWithinAmount));

        order.remaining = Field::Absent;
        assert_eq!(failed_check(&order), None);
    }

    #[test]
    fn test_trades_must_be_sequence_when_truthy() {
        let mut order = create_test_order();
        order.trades = Field::Present(vec![json!({"id": "t1"})]);
        assert_eq!(failed_check(&order), None);

        order.trades = Field::Mismatch(json!({}));
        assert_eq!(failed_check(&order), None);

        order.trades = Field::Mismatch(json!({"id": "t1"}));
        assert_eq!(failed_check(&order), Some(Check::TradesIsSequence));
    }

    #[test]
    fn test_fee_law() {
        let mut order = create_test_order();

        order.fee = Field::Present(Fee {
            cost: Field::Present(0.0),
            ..Default::default()
        });
        assert_eq!(failed_check(&order), None);

        order.fee = Field::Present(Fee {
            cost: Field::Present(5.0),
            ..Default::default()
        });
        let violation = validate_order(&Iso8601, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.check, Check::FeeWellFormed);
        assert_eq!(violation.field, "fee.currency");

        order.fee = Field::Present(Fee::new(5.0, "USD"));
        assert_eq!(failed_check(&order), None);

        order.fee = Field::Present(Fee::new(5.0, ""));
        assert_eq!(failed_check(&order), Some(Check::FeeWellFormed));
    }

    #[test]
    fn test_fee_cost_must_be_numeric() {
        let mut order = create_test_order();
        order.fee = Field::Present(Fee {
            currency: Field::Present("USD".to_string()),
            ..Default::default()
        });
        let violation = validate_order(&Iso8601, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.field, "fee.cost");
        assert_eq!(violation.kind, ViolationKind::Missing);

        order.fee = Field::Mismatch(json!(5));
        assert_eq!(failed_check(&order), Some(Check::FeeWellFormed));

        order.fee = Field::Present(Fee::default());
        assert_eq!(failed_check(&order), None);
    }

    #[test]
    fn test_info_must_be_truthy() {
        let mut order = create_test_order();
        order.info = Field::Present(json!({}));
        assert_eq!(failed_check(&order), Some(Check::InfoPresent));

        order.info = Field::Absent;
        let violation = validate_order(&Iso8601, &order, "BTC/USD", NOW).unwrap_err();
        assert_eq!(violation.kind, ViolationKind::Missing);
    }

    #[test]
    fn test_first_violation_wins() {
        let mut order = create_test_order();
        order.price = Field::Present(-1.0);
        order.amount = Field::Present(-1.0);
        order.info = Field::Null;

        assert_eq!(failed_check(&order), Some(Check::PricePositive));
    }

    #[test]
    fn test_check_in_isolation() {
        let validator = OrderValidator::new();
        let mut order = create_test_order();
        order.side = Field::Present("short".to_string());

        assert!(validator
            .check(Check::PricePositive, &Iso8601, &order, "BTC/USD", NOW)
            .is_ok());
        assert!(validator
            .check(Check::SideAllowed, &Iso8601, &order, "BTC/USD", NOW)
            .is_err());
    }

    #[test]
    fn test_validate_json() {
        let json = r#"{
            "id": "123",
            "timestamp": 1609459200000,
            "datetime": "2021-01-01T00:00:00.000Z",
            "lastTradeTimestamp": null,
            "status": "open",
            "symbol": "BTC/USD",
            "type": "limit",
            "side": "sell",
            "price": 29000,
            "amount": 1,
            "filled": null,
            "remaining": 1,
            "trades": null,
            "fee": null,
            "info": {"orderId": "123"}
        }"#;

        assert!(validate_json(&Iso8601, json, "BTC/USD", NOW).is_ok());

        let json = json.replace("1609459200000,", "1609459200000.0,");
        assert!(validate_json(&Iso8601, &json, "BTC/USD", NOW).is_ok());

        let err = validate_json(&Iso8601, "[]", "BTC/USD", NOW).unwrap_err();
        assert!(!err.is_violation());
    }
}
