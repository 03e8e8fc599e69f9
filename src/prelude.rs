//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use chaos_configmap_reconciler::prelude::*;
//! ```

// CRD types
pub use crate::crd::{ChaosExperiment, ChaosExperimentSpec, ConfigMapEntry, ExperimentDefinition};

// Cluster capability
pub use crate::cluster::{ClusterApi, KubeClusterApi};

// Reconciler operations
pub use crate::reconciler::{
    build_config_map_object, build_volume_mounts, build_volumes, check_config_maps,
    create_config_maps, validate_config_maps, ConfigMapReconciler, PreparedVolumes,
    ValidationOutcome,
};

pub use crate::config::ReconcilerConfig;
pub use crate::engine::EngineDetails;
pub use crate::error::ConfigMapError;
