//! Error types for order conformance checks

use thiserror::Error;

use crate::validator::Check;

/// Result type for conformance operations
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// How a single invariant was violated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViolationKind {
    /// Required key is missing
    #[error("field is missing")]
    Missing,

    /// Value has the wrong type
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// Expected type name
        expected: &'static str,
        /// Type name of the actual value
        found: String,
    },

    /// Value is outside its allowed range
    #[error("{value} is not {constraint}")]
    OutOfRange {
        /// Offending value
        value: String,
        /// Range the value must satisfy
        constraint: String,
    },

    /// Value differs from the one it must equal
    #[error("expected {expected}, found {found}")]
    Mismatch {
        /// Expected value
        expected: String,
        /// Actual value
        found: String,
    },

    /// Value is not one of the enumerated ones
    #[error("{value:?} is not one of {allowed:?}")]
    NotAllowed {
        /// Offending value
        value: String,
        /// Accepted values
        allowed: &'static [&'static str],
    },

    /// Value is present but empty, zero or null
    #[error("value is falsy")]
    Falsy,
}

/// The first invariant an order record failed
#[derive(Debug, Clone, PartialEq, Error)]
#[error("check {check} failed on '{field}': {kind}")]
pub struct Violation {
    /// Which check failed
    pub check: Check,
    /// Field the check looked at
    pub field: &'static str,
    /// How it failed
    pub kind: ViolationKind,
}

impl Violation {
    /// Create a new violation
    pub fn new(check: Check, field: &'static str, kind: ViolationKind) -> Self {
        Self { check, field, kind }
    }
}

/// Conformance error types
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// Order record violated an invariant
    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] Violation),

    /// An order within a batch violated an invariant
    #[error("Order #{index} ({order_id}) failed: {violation}")]
    OrderViolation {
        /// Position of the order in the batch
        index: usize,
        /// Order id, or a placeholder when the id itself is broken
        order_id: String,
        /// First violated invariant
        violation: Violation,
    },

    /// Order status does not belong to the listing it was returned by
    #[error("Order #{index} ({order_id}) has status {status} in a {listing} listing")]
    ListingMismatch {
        /// Position of the order in the batch
        index: usize,
        /// Order id
        order_id: String,
        /// Listing name
        listing: String,
        /// Status the order reported
        status: String,
    },

    /// Input is not an order record at all
    #[error("Invalid order record: {0}")]
    InvalidRecord(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConformanceError {
    /// The violated invariant, if this error carries one
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ConformanceError::InvariantViolation(violation)
            | ConformanceError::OrderViolation { violation, .. } => Some(violation),
            _ => None,
        }
    }

    /// Check if the error is a conformance failure rather than bad input or setup
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            ConformanceError::InvariantViolation(_)
                | ConformanceError::OrderViolation { .. }
                | ConformanceError::ListingMismatch { .. }
        )
    }
}
