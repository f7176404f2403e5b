//! Truthiness of order record values
//!
//! Exchanges legitimately omit or zero some order fields, so the conditional checks
//! of the validator only run when a value is "meaningfully present". A value is falsy
//! when it is zero, `false`, an empty string, an empty sequence, an empty mapping,
//! null, or a missing key. Everything else (including `NaN`) is truthy.

use serde_json::{Map, Value};

use crate::order::{Fee, Field, OrderRecord};

/// Classify a value as meaningfully present or not
pub trait Truthy {
    /// Check if the value is meaningfully present
    fn is_truthy(&self) -> bool;

    /// Check if the value counts as absent
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        // NaN compares unequal to zero and is therefore truthy
        *self != 0.0
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Map<String, Value> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f.is_truthy()),
            Value::String(s) => s.is_truthy(),
            Value::Array(items) => items.is_truthy(),
            Value::Object(map) => map.is_truthy(),
        }
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_truthy())
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Field<T> {
    fn is_truthy(&self) -> bool {
        match self {
            Field::Absent | Field::Null => false,
            Field::Mismatch(raw) => raw.is_truthy(),
            Field::Present(value) => value.is_truthy(),
        }
    }
}

impl Truthy for Fee {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for OrderRecord {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}
