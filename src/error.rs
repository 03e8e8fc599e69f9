//! # Errors
//!
//! Error kinds surfaced by the ConfigMap reconciler.
//!
//! Every variant aborts the batch it occurs in; there is no partial success.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigMapError {
    /// Name or mount path is empty
    #[error("Aborting execution, configMap name or mountPath is invalid (name: {name:?}, mountPath: {mount_path:?})")]
    InvalidEntry { name: String, mount_path: String },

    /// The cluster answered a GET with something other than 404
    #[error("Failed to look up ConfigMap {namespace}/{name}: {source}")]
    LookupFailed {
        name: String,
        namespace: String,
        #[source]
        source: anyhow::Error,
    },

    /// Not in the cluster and no inline data to create it from
    #[error("Aborting execution, configMap {name} not found and doesn't contain data")]
    MissingData { name: String },

    /// The cluster rejected the create call
    #[error("Failed to create ConfigMap {namespace}/{name}: {source}")]
    CreationFailed {
        name: String,
        namespace: String,
        #[source]
        source: anyhow::Error,
    },

    /// The ChaosExperiment the ConfigMaps are declared in could not be read
    #[error("Failed to get ChaosExperiment {namespace}/{name}: {source}")]
    ExperimentLookupFailed {
        name: String,
        namespace: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ConfigMapError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigMapError::InvalidEntry { .. } => "InvalidEntry",
            ConfigMapError::LookupFailed { .. } => "LookupFailed",
            ConfigMapError::MissingData { .. } => "MissingData",
            ConfigMapError::CreationFailed { .. } => "CreationFailed",
            ConfigMapError::ExperimentLookupFailed { .. } => "ExperimentLookupFailed",
        }
    }
}
