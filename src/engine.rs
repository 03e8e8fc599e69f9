//! # Engine Details
//!
//! Per-run context handed to the reconciler by its caller.

use crate::cluster::ClusterApi;

/// Target namespace plus the cluster capability used to reach it
///
/// Owned by the caller and passed by reference; the reconciler never keeps it.
pub struct EngineDetails<'a> {
    /// Namespace holding the experiment and its ConfigMaps
    pub app_namespace: String,
    /// Cluster connection
    pub client: &'a dyn ClusterApi,
}

impl<'a> EngineDetails<'a> {
    pub fn new(app_namespace: impl Into<String>, client: &'a dyn ClusterApi) -> Self {
        Self {
            app_namespace: app_namespace.into(),
            client,
        }
    }
}

impl std::fmt::Debug for EngineDetails<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineDetails")
            .field("app_namespace", &self.app_namespace)
            .finish_non_exhaustive()
    }
}
