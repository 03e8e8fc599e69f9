//! Common test utilities
//!
//! In-memory `ClusterApi` that records every call and can be told to fail.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chaos_configmap_reconciler::cluster::ClusterApi;
use chaos_configmap_reconciler::crd::{
    ChaosExperiment, ChaosExperimentSpec, ConfigMapEntry, ExperimentDefinition,
};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::ObjectMeta;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

/// Cluster call observed by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetConfigMap { namespace: String, name: String },
    CreateConfigMap { namespace: String, name: String },
    GetExperiment { namespace: String, name: String },
}

#[derive(Default)]
pub struct FakeClusterApi {
    config_maps: Mutex<BTreeMap<(String, String), ConfigMap>>,
    experiments: Mutex<BTreeMap<(String, String), ChaosExperiment>>,
    fail_lookup: Mutex<HashSet<String>>,
    fail_create: Mutex<HashSet<String>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClusterApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing ConfigMap
    pub fn with_config_map(self, namespace: &str, name: &str) -> Self {
        let cm = ConfigMap {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        self.config_maps
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), cm);
        self
    }

    /// Seed a ChaosExperiment declaring the given ConfigMaps
    pub fn with_experiment(self, namespace: &str, name: &str, entries: Vec<ConfigMapEntry>) -> Self {
        let mut experiment = ChaosExperiment::new(
            name,
            ChaosExperimentSpec {
                definition: ExperimentDefinition {
                    image: "litmuschaos/go-runner:latest".to_string(),
                    configmaps: entries,
                    ..Default::default()
                },
            },
        );
        experiment.metadata.namespace = Some(namespace.to_string());
        self.experiments
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), experiment);
        self
    }

    /// GETs for this ConfigMap name fail with a non-404 error
    pub fn failing_lookup(self, name: &str) -> Self {
        self.fail_lookup.lock().unwrap().insert(name.to_string());
        self
    }

    /// Creates for this ConfigMap name are rejected
    pub fn failing_create(self, name: &str) -> Self {
        self.fail_create.lock().unwrap().insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Names passed to create, in call order
    pub fn created_names(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateConfigMap { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn stored(&self, namespace: &str, name: &str) -> Option<ConfigMap> {
        self.config_maps
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ClusterApi for FakeClusterApi {
    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>> {
        self.record(Call::GetConfigMap {
            namespace: namespace.to_string(),
            name: name.to_string(),
        });
        if self.fail_lookup.lock().unwrap().contains(name) {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.stored(namespace, name))
    }

    async fn create_config_map(&self, namespace: &str, config_map: &ConfigMap) -> Result<ConfigMap> {
        let name = config_map.metadata.name.clone().unwrap_or_default();
        self.record(Call::CreateConfigMap {
            namespace: namespace.to_string(),
            name: name.clone(),
        });
        if self.fail_create.lock().unwrap().contains(&name) {
            return Err(anyhow!("admission webhook denied the request"));
        }

        let mut config_maps = self.config_maps.lock().unwrap();
        let key = (namespace.to_string(), name.clone());
        if config_maps.contains_key(&key) {
            return Err(anyhow!("configmaps \"{name}\" already exists"));
        }
        let mut stored = config_map.clone();
        stored.metadata.namespace = Some(namespace.to_string());
        config_maps.insert(key, stored.clone());
        Ok(stored)
    }

    async fn get_chaos_experiment(&self, namespace: &str, name: &str) -> Result<ChaosExperiment> {
        self.record(Call::GetExperiment {
            namespace: namespace.to_string(),
            name: name.to_string(),
        });
        self.experiments
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| anyhow!("chaosexperiments.litmuschaos.io \"{name}\" not found"))
    }
}

pub fn entry(name: &str, mount_path: &str) -> ConfigMapEntry {
    ConfigMapEntry::new(name, mount_path)
}

pub fn entry_with_data(name: &str, mount_path: &str) -> ConfigMapEntry {
    ConfigMapEntry::new(name, mount_path).with_data([("parameters.yml", "duration: 60")])
}
