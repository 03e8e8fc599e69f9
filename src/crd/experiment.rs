//! # ChaosExperiment Spec
//!
//! The parts of the Litmus `ChaosExperiment` resource the reconciler reads.

use crate::crd::ConfigMapEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ChaosExperiment Custom Resource Definition
///
/// Only `spec.definition` matters here; its `configmaps` list is what gets
/// validated and mounted into the experiment runner.
///
/// # Example
///
/// ```yaml
/// apiVersion: litmuschaos.io/v1alpha1
/// kind: ChaosExperiment
/// metadata:
///   name: pod-delete
///   namespace: litmus
/// spec:
///   definition:
///     scope: Namespaced
///     image: litmuschaos/go-runner:latest
///     args: ["-c", "./experiments -name pod-delete"]
///     command: ["/bin/bash"]
///     configmaps:
///       - name: experiment-data
///         mountPath: /mnt
/// ```
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "ChaosExperiment",
    group = "litmuschaos.io",
    version = "v1alpha1",
    namespaced,
    shortname = "chexp"
)]
#[serde(rename_all = "camelCase")]
pub struct ChaosExperimentSpec {
    /// How the experiment is run
    pub definition: ExperimentDefinition,
}

/// Runner definition of a chaos experiment
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentDefinition {
    /// Runner image
    pub image: String,
    /// Image pull policy for the runner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
    /// Namespaced or Cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default)]
    pub command: Vec<String>,
    #[serde(default)]
    pub args: Vec<String>,
    /// Labels applied to the runner pod
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Environment variables passed to the runner
    #[serde(default)]
    pub env: Vec<EnvPair>,
    /// ConfigMaps to ensure and mount
    #[serde(default)]
    pub configmaps: Vec<ConfigMapEntry>,
}

/// Name/value environment variable
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
pub struct EnvPair {
    pub name: String,
    #[serde(default)]
    pub value: String,
}
