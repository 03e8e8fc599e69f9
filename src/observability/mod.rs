//! # Observability
//!
//! Observability modules for metrics and logging.
//!
//! - `metrics`: Prometheus counters for validated and created ConfigMaps
//! - `logging`: tracing subscriber setup

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
