//! # Cluster API
//!
//! Abstract interface for the cluster calls the reconciler makes.
//!
//! The reconciler only ever reads one ConfigMap, creates one ConfigMap or
//! reads one ChaosExperiment, so that is all this trait covers. The real
//! implementation lives in `kubernetes.rs`; tests substitute an in-memory fake.

mod kubernetes;

pub use kubernetes::KubeClusterApi;

use crate::crd::ChaosExperiment;
use anyhow::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;

/// Cluster capability trait
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// Get a ConfigMap by name
    /// Returns `Ok(None)` when the cluster reports it does not exist (404)
    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>>;

    /// Create a ConfigMap, returning the object as stored by the cluster
    async fn create_config_map(&self, namespace: &str, config_map: &ConfigMap)
        -> Result<ConfigMap>;

    /// Get a ChaosExperiment by name
    async fn get_chaos_experiment(&self, namespace: &str, name: &str) -> Result<ChaosExperiment>;
}
