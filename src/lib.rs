//! Chaos ConfigMap Reconciler Library
//!
//! Validates the ConfigMaps a `ChaosExperiment` declares against a live
//! cluster, creates the missing ones from inline data, and derives the
//! volumes and mounts that inject them into the experiment runner pod.
//! Tests are included in the module files and under `tests/`.
//!
//! ## Quick Start
//!
//! ```rust
//! use chaos_configmap_reconciler::prelude::*;
//! ```

pub mod cluster;
pub mod config;
pub mod constants;
pub mod crd;
pub mod engine;
pub mod error;
pub mod observability;
pub mod prelude;
pub mod reconciler;
