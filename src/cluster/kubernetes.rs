//! # Kubernetes Cluster API
//!
//! `ClusterApi` backed by a kube-rs `Client`.

use super::ClusterApi;
use crate::crd::ChaosExperiment;
use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    api::{Api, PostParams},
    Client,
};
use tracing::debug;

/// Kubernetes-backed cluster API
#[derive(Clone)]
pub struct KubeClusterApi {
    client: Client,
}

impl std::fmt::Debug for KubeClusterApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeClusterApi").finish_non_exhaustive()
    }
}

impl KubeClusterApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build from the ambient kubeconfig or in-cluster service account
    pub async fn try_default() -> Result<Self> {
        let client = Client::try_default()
            .await
            .context("Failed to create Kubernetes client")?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ClusterApi for KubeClusterApi {
    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        debug!("GET ConfigMap {}/{}", namespace, name);
        // get_opt maps 404 to None; every other API error stays an error
        let config_map = config_maps
            .get_opt(name)
            .await
            .with_context(|| format!("GET ConfigMap {namespace}/{name}"))?;
        Ok(config_map)
    }

    async fn create_config_map(
        &self,
        namespace: &str,
        config_map: &ConfigMap,
    ) -> Result<ConfigMap> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        let name = config_map.metadata.name.as_deref().unwrap_or("<unnamed>");
        debug!("POST ConfigMap {}/{}", namespace, name);
        let created = config_maps
            .create(&PostParams::default(), config_map)
            .await
            .with_context(|| format!("POST ConfigMap {namespace}/{name}"))?;
        Ok(created)
    }

    async fn get_chaos_experiment(&self, namespace: &str, name: &str) -> Result<ChaosExperiment> {
        let experiments: Api<ChaosExperiment> = Api::namespaced(self.client.clone(), namespace);
        debug!("GET ChaosExperiment {}/{}", namespace, name);
        let experiment = experiments
            .get(name)
            .await
            .with_context(|| format!("GET ChaosExperiment {namespace}/{name}"))?;
        Ok(experiment)
    }
}
