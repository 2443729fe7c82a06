//! Contract test suite for the deferred_runtime component
