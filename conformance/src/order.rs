//! Order record types
//!
//! This module defines the order record as returned by an exchange integration.
//! Every key of the unified order structure is modelled as a [`Field`], which keeps
//! track of whether the key was missing, null, of the wrong JSON type, or present
//! with a usable value. Type checks therefore stay part of the validator instead of
//! failing early during deserialization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ConformanceError, ConformanceResult};

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// State of a single key in an exchange-returned mapping
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Key is not present in the record
    Absent,
    /// Key is present with a null value
    Null,
    /// Key is present but its value is not of the expected type
    Mismatch(Value),
    /// Key is present with a value of the expected type
    Present(T),
}

impl<T> Field<T> {
    /// Check if the key is missing from the record
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// Check if the key holds a value of the expected type
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Borrow the typed value, if any
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Take the typed value, if any
    pub fn into_present(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Short description of what the key holds, for violation messages
    pub fn describe(&self) -> String
    where
        T: Serialize,
    {
        match self {
            Field::Absent => "absent".to_string(),
            Field::Null => "null".to_string(),
            Field::Mismatch(raw) => raw.to_string(),
            Field::Present(value) => serde_json::to_string(value).unwrap_or_default(),
        }
    }
}

impl<T: DeserializeOwned> Field<T> {
    /// Classify a raw JSON value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Field::Null,
            value => match T::deserialize(&value) {
                Ok(typed) => Field::Present(typed),
                Err(_) => Field::Mismatch(value),
            },
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Null,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Field::from_value(value))
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Absent | Field::Null => serializer.serialize_none(),
            Field::Mismatch(raw) => raw.serialize(serializer),
            Field::Present(value) => value.serialize(serializer),
        }
    }
}

/// Whole epoch milliseconds of a numeric timestamp
///
/// Returns `None` for fractional, non-finite or out-of-range values.
pub fn whole_millis(timestamp: f64) -> Option<Timestamp> {
    if !timestamp.is_finite() || timestamp.fract() != 0.0 {
        return None;
    }
    if timestamp < Timestamp::MIN as f64 || timestamp >= Timestamp::MAX as f64 {
        return None;
    }
    Some(timestamp as Timestamp)
}

/// JSON type name of a raw value
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Order status values accepted by the unified order structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order is working on the exchange
    Open,
    /// Order is completely filled
    Closed,
    /// Order has been canceled
    Canceled,
}

impl OrderStatus {
    /// Wire names of all accepted statuses
    pub const NAMES: &'static [&'static str] = &["open", "closed", "canceled"];

    /// Parse a wire name
    pub fn from_wire(status: &str) -> Option<Self> {
        match status {
            "open" => Some(OrderStatus::Open),
            "closed" => Some(OrderStatus::Closed),
            "canceled" => Some(OrderStatus::Canceled),
            _ => None,
        }
    }

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Closed => "closed",
            OrderStatus::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Wire names of both sides
    pub const NAMES: &'static [&'static str] = &["buy", "sell"];

    /// Parse a wire name
    pub fn from_wire(side: &str) -> Option<Self> {
        match side {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Side> for String {
    fn from(side: Side) -> Self {
        side.as_str().to_string()
    }
}

/// Fee charged for an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee amount
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub cost: Field<f64>,

    /// Fee currency code
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub currency: Field<String>,

    /// Any other key the exchange reported (rate, type, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fee {
    /// Create a fee with both cost and currency set
    pub fn new(cost: f64, currency: impl Into<String>) -> Self {
        Self {
            cost: Field::Present(cost),
            currency: Field::Present(currency.into()),
            extra: Map::new(),
        }
    }

    /// Check if the fee mapping has no keys at all
    pub fn is_empty(&self) -> bool {
        self.cost.is_absent() && self.currency.is_absent() && self.extra.is_empty()
    }
}

/// Unified order record as returned by an exchange integration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Exchange order identifier
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<String>,

    /// Creation time in epoch milliseconds; any JSON number is accepted
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub timestamp: Field<f64>,

    /// ISO-8601 rendering of `timestamp`
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub datetime: Field<String>,

    /// Time of the last fill; the key is mandatory, the value may be null
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub last_trade_timestamp: Field<Timestamp>,

    /// Order status
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<String>,

    /// Unified market symbol (e.g. "BTC/USD")
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub symbol: Field<String>,

    /// Order type (limit, market, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_absent")]
    pub order_type: Field<String>,

    /// Order side
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub side: Field<String>,

    /// Limit or average price
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub price: Field<f64>,

    /// Total requested quantity
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub amount: Field<f64>,

    /// Quantity executed so far
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub filled: Field<f64>,

    /// Quantity yet to execute
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub remaining: Field<f64>,

    /// Trades belonging to this order
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub trades: Field<Vec<Value>>,

    /// Fee charged so far
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub fee: Field<Fee>,

    /// Raw exchange payload the record was parsed from
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub info: Field<Value>,

    /// Every other key of the unified structure (clientOrderId, cost, average, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderRecord {
    /// Start building a record field by field
    pub fn builder() -> OrderRecordBuilder {
        OrderRecordBuilder::default()
    }

    /// Build a record from a raw JSON value
    ///
    /// `null` yields an empty record. Any other non-object value is rejected.
    pub fn from_value(value: Value) -> ConformanceResult<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(ConformanceError::InvalidRecord(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Parse a record from JSON text
    pub fn from_json(json: &str) -> ConformanceResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Serialize back to the unified JSON shape
    pub fn to_value(&self) -> ConformanceResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Check if the record has no keys at all
    pub fn is_empty(&self) -> bool {
        self.id.is_absent()
            && self.timestamp.is_absent()
            && self.datetime.is_absent()
            && self.last_trade_timestamp.is_absent()
            && self.status.is_absent()
            && self.symbol.is_absent()
            && self.order_type.is_absent()
            && self.side.is_absent()
            && self.price.is_absent()
            && self.amount.is_absent()
            && self.filled.is_absent()
            && self.remaining.is_absent()
            && self.trades.is_absent()
            && self.fee.is_absent()
            && self.info.is_absent()
            && self.extra.is_empty()
    }

    /// Order id for log and error messages
    pub fn display_id(&self) -> String {
        match &self.id {
            Field::Present(id) => id.clone(),
            Field::Absent => "<absent>".to_string(),
            Field::Null => "<null>".to_string(),
            Field::Mismatch(raw) => format!("<{}>", json_type_name(raw)),
        }
    }
}

/// Builder for [`OrderRecord`]
#[derive(Debug, Clone, Default)]
pub struct OrderRecordBuilder {
    record: OrderRecord,
}

impl OrderRecordBuilder {
    /// Set the order id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.id = Field::Present(id.into());
        self
    }

    /// Set the creation timestamp
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.record.timestamp = Field::Present(timestamp as f64);
        self
    }

    /// Set the datetime string
    pub fn datetime(mut self, datetime: impl Into<String>) -> Self {
        self.record.datetime = Field::Present(datetime.into());
        self
    }

    /// Set the last trade timestamp (`None` stores an explicit null)
    pub fn last_trade_timestamp(mut self, timestamp: Option<Timestamp>) -> Self {
        self.record.last_trade_timestamp = timestamp.into();
        self
    }

    /// Set the status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.record.status = Field::Present(status.into());
        self
    }

    /// Set the symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.record.symbol = Field::Present(symbol.into());
        self
    }

    /// Set the order type
    pub fn order_type(mut self, order_type: impl Into<String>) -> Self {
        self.record.order_type = Field::Present(order_type.into());
        self
    }

    /// Set the side
    pub fn side(mut self, side: impl Into<String>) -> Self {
        self.record.side = Field::Present(side.into());
        self
    }

    /// Set the price
    pub fn price(mut self, price: f64) -> Self {
        self.record.price = Field::Present(price);
        self
    }

    /// Set the amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.record.amount = Field::Present(amount);
        self
    }

    /// Set the filled quantity
    pub fn filled(mut self, filled: f64) -> Self {
        self.record.filled = Field::Present(filled);
        self
    }

    /// Set the remaining quantity
    pub fn remaining(mut self, remaining: f64) -> Self {
        self.record.remaining = Field::Present(remaining);
        self
    }

    /// Set the trades list
    pub fn trades(mut self, trades: Vec<Value>) -> Self {
        self.record.trades = Field::Present(trades);
        self
    }

    /// Set the fee
    pub fn fee(mut self, fee: Fee) -> Self {
        self.record.fee = Field::Present(fee);
        self
    }

    /// Set the raw exchange payload
    pub fn info(mut self, info: Value) -> Self {
        self.record.info = Field::from(info);
        self
    }

    /// Set any other key of the unified structure
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.record.extra.insert(key.into(), value);
        self
    }

    /// Finish building
    pub fn build(self) -> OrderRecord {
        self.record
    }
}
