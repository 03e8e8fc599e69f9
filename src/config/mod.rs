//! # Configuration
//!
//! Runtime configuration for the reconciler, read from environment variables.

mod reconciler;

pub use reconciler::ReconcilerConfig;
