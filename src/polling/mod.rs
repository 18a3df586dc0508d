//! Client-side polling of asynchronous data producers.
//!
//! A [`PollingDataSource`] caches the latest value of a producer, refetches
//! it on an interval, retries failures a bounded number of times and never
//! runs two producer calls at once. The specialised sources in [`sources`]
//! fix the configuration and producer for each dashboard panel.

pub mod config;
pub mod runtime;
pub mod source;
pub mod sources;
pub mod state;

pub use config::{PollingConfig, PollingConfigUpdate};
pub use source::{CycleOutcome, FetchKind, PollingDataSource};
pub use state::PollingState;
