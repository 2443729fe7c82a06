//! Unit test suite for the deferred_runtime component

mod driver_test;
