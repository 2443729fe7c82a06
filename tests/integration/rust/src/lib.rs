//! Integration test suite for the deferred-value demonstration workspace
//!
//! This crate provides integration tests that verify the components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use deferred_runtime;
    pub use flow_cli;
    pub use flow_types;
}
