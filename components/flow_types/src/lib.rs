//! Core value, failure, and timing types for the deferred-value demos.
//!
//! This crate provides the foundational types shared by the deferred
//! runtime and the demo CLI: the tagged value representation, rejection
//! reasons, typed completions, and the explicit stopwatch.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of the values flowing through chains
//! - [`Reason`] - A rejection reason with its failure taxonomy
//! - [`FailureKind`] - How a rejection came to be
//! - [`Completion`] - Typed success-or-failure outcome of one async step
//! - [`Stopwatch`] - Explicit caller-held timer for the blocking demos
//!
//! # Examples
//!
//! ```
//! use flow_types::{Completion, Reason, Value};
//!
//! // Values flowing through a chain
//! let num = Value::Int(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_name(), "int");
//!
//! // A failed completion carrying the thrown value
//! let failed: Completion = Err(Reason::explicit(Value::from("Crash")));
//! assert!(failed.is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod reason;
mod stopwatch;
mod value;

pub use reason::{Completion, FailureKind, Reason};
pub use stopwatch::Stopwatch;
pub use value::Value;
