//! Rejection reasons and typed completions.
//!
//! This module provides the failure side of the model: the taxonomy of how
//! a rejection came to be, the reason value itself, and the `Completion`
//! sum type that replaces the two-argument error-first callback convention.

use crate::Value;
use std::fmt;

/// How a rejection came to be.
///
/// The kind is bookkeeping for diagnostics; rejection handlers observe the
/// payload value, not the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The producer passed to `pending` failed synchronously
    Producer,
    /// A chain handler failed while running
    Handler,
    /// A producer or handler explicitly rejected with a reason
    Explicit,
}

/// A rejection reason: the payload a failing step threw, plus its origin.
///
/// Reasons propagate unchanged through every chain step lacking a rejection
/// handler, until a handler recovers or the chain ends unobserved.
///
/// # Examples
///
/// ```
/// use flow_types::{FailureKind, Reason, Value};
///
/// let reason = Reason::handler(Value::from("Foo"));
/// assert_eq!(reason.kind(), FailureKind::Handler);
/// assert_eq!(reason.value(), &Value::from("Foo"));
/// assert_eq!(reason.to_string(), "Foo");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reason {
    kind: FailureKind,
    value: Value,
}

impl Reason {
    /// A failure raised by a producer while it ran synchronously.
    pub fn producer(value: Value) -> Self {
        Self {
            kind: FailureKind::Producer,
            value,
        }
    }

    /// A failure raised by a chain handler while it ran.
    pub fn handler(value: Value) -> Self {
        Self {
            kind: FailureKind::Handler,
            value,
        }
    }

    /// A deliberate rejection with a reason value.
    pub fn explicit(value: Value) -> Self {
        Self {
            kind: FailureKind::Explicit,
            value,
        }
    }

    /// The origin of this rejection.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The payload a rejection handler observes.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the reason, yielding the payload.
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Renders the payload only; the kind never reaches console output.
impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The outcome of one asynchronous step: a value or a rejection reason.
///
/// This is the typed replacement for the `(error, result)` two-argument
/// callback convention: a continuation takes a single `Completion` and
/// matches, instead of null-checking both slots.
///
/// # Examples
///
/// ```
/// use flow_types::{Completion, Reason, Value};
///
/// fn report(completion: Completion) -> String {
///     match completion {
///         Ok(value) => format!("ok: {}", value),
///         Err(reason) => format!("failed: {}", reason),
///     }
/// }
///
/// assert_eq!(report(Ok(Value::Int(3))), "ok: 3");
/// assert_eq!(report(Err(Reason::explicit(Value::from("gone")))), "failed: gone");
/// ```
pub type Completion = Result<Value, Reason>;
