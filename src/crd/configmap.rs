//! # ConfigMap Entry
//!
//! A ConfigMap reference declared inside a ChaosExperiment definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ConfigMap reference attached to an experiment
///
/// The reconciler makes sure a ConfigMap called `name` exists in the target
/// namespace and mounts it into the runner pod at `mount_path`.
///
/// # Example
///
/// ```yaml
/// configmaps:
///   - name: experiment-data
///     mountPath: /mnt
///     data:
///       parameters.yml: |
///         duration: 60
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapEntry {
    /// Name of the ConfigMap object (and of the generated volume)
    #[serde(default)]
    pub name: String,
    /// Path inside the runner container where the ConfigMap is mounted
    #[serde(default)]
    pub mount_path: String,
    /// Inline key/value data used to create the ConfigMap when it does not exist
    /// A present but empty map still allows creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
}

impl ConfigMapEntry {
    /// Entry without inline data
    pub fn new(name: impl Into<String>, mount_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mount_path: mount_path.into(),
            data: None,
        }
    }

    /// Attach inline data
    #[must_use]
    pub fn with_data<K, V, I>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.data = Some(
            data.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Both name and mount path are non-empty
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.mount_path.is_empty()
    }

    /// Inline data was supplied, so the ConfigMap can be created if missing
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}
