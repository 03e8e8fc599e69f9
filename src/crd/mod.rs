//! # Custom Resource Definitions
//!
//! CRD types read by the reconciler.
//!
//! ## Module Structure
//!
//! - `experiment.rs` - `ChaosExperiment` resource and its runner definition
//! - `configmap.rs` - ConfigMap references declared by an experiment

mod configmap;
mod experiment;

pub use configmap::ConfigMapEntry;
pub use experiment::{ChaosExperiment, ChaosExperimentSpec, EnvPair, ExperimentDefinition};
