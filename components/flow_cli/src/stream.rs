//! Simulated byte-stream sources.
//!
//! The demos exercise I/O-bound asynchronous work without touching a real
//! file system: a [`SourceCatalog`] holds named byte payloads, and a read
//! completes through the driver's timer queue after the source's latency.
//! Reading an unknown name fails the completion, which is what the
//! error-propagation demos feed on.

use deferred_runtime::{Deferred, Driver};
use flow_types::{Completion, Reason, Value};
use std::time::Duration;

/// A named byte payload with a read latency.
#[derive(Debug, Clone)]
pub struct DataSource {
    name: String,
    contents: Vec<u8>,
    latency: Duration,
}

impl DataSource {
    /// Creates a source holding `contents`, answering after `latency`.
    pub fn new(name: &str, contents: &[u8], latency: Duration) -> Self {
        Self {
            name: name.to_string(),
            contents: contents.to_vec(),
            latency,
        }
    }

    /// The source's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of payload bytes.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// The set of sources a demo can read from.
pub struct SourceCatalog {
    sources: Vec<DataSource>,
}

impl SourceCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// The catalog the demos use: one well-known source, `demo.data`.
    ///
    /// Reads of any other name (the demos try `demo.data2`) fail.
    pub fn with_demo_data() -> Self {
        let mut catalog = Self::new();
        catalog.add(DataSource::new(
            "demo.data",
            b"pretend this took a while to arrive",
            Duration::from_millis(80),
        ));
        catalog
    }

    /// Adds a source to the catalog.
    pub fn add(&mut self, source: DataSource) {
        self.sources.push(source);
    }

    fn find(&self, name: &str) -> Option<&DataSource> {
        self.sources.iter().find(|source| source.name == name)
    }

    /// Callback-style read: `continuation` receives one [`Completion`]
    /// after the source's latency, carrying the byte count on success or a
    /// failure for an unknown name.
    pub fn read_with<F>(&self, driver: &Driver, name: &str, continuation: F)
    where
        F: FnOnce(Completion) + 'static,
    {
        let completion = self.completion_for(name);
        let delay = self
            .find(name)
            .map(|source| source.latency)
            .unwrap_or(Duration::from_millis(10));
        driver.schedule_after(delay, move || continuation(completion));
    }

    /// Deferred-style read: the returned deferred fulfills with the byte
    /// count, or rejects for an unknown name.
    pub fn read(&self, driver: &Driver, name: &str) -> Deferred {
        let completion = self.completion_for(name);
        let delay = self
            .find(name)
            .map(|source| source.latency)
            .unwrap_or(Duration::from_millis(10));
        driver.pending(|settle| {
            let settle = settle.clone();
            driver.schedule_after(delay, move || match completion {
                Ok(value) => settle.resolve(value),
                Err(reason) => settle.reject(reason.into_value()),
            });
            Ok(())
        })
    }

    fn completion_for(&self, name: &str) -> Completion {
        match self.find(name) {
            Some(source) => Ok(Value::Int(source.len() as i64)),
            None => Err(Reason::explicit(Value::from(format!(
                "no such source: {}",
                name
            )))),
        }
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
