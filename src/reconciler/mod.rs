//! # Reconciler
//!
//! Ensures the ConfigMaps a ChaosExperiment declares exist in the target
//! namespace and turns them into volumes for the runner pod.
//!
//! ## Flow
//!
//! 1. `check_config_maps` reads the experiment and returns its ConfigMap entries
//! 2. `validate_config_maps` looks each one up, creating it from inline data if absent
//! 3. `build_volumes` / `build_volume_mounts` project the accepted entries into the pod spec
//!
//! Each step is a single sequential pass and the first error aborts it.

mod check;
mod create;
mod object;
mod validate;
mod volumes;

pub use check::check_config_maps;
pub use object::build_config_map_object;
pub use validate::ValidationOutcome;
pub use volumes::build_volume_mounts;

use crate::config::ReconcilerConfig;
use crate::constants::{DEFAULT_CONFIGMAP_LABEL_KEY, DEFAULT_CONFIGMAP_VOLUME_MODE};
use crate::crd::ConfigMapEntry;
use crate::engine::EngineDetails;
use crate::error::ConfigMapError;
use k8s_openapi::api::core::v1::{Volume, VolumeMount};
use serde::Serialize;
use tracing::info;

/// Validate entries against the cluster, creating missing ones that carry data
///
/// Created ConfigMaps get the default `Experiment` label.
pub async fn validate_config_maps(
    entries: &[ConfigMapEntry],
    engine: &EngineDetails<'_>,
) -> Result<Vec<ConfigMapEntry>, ConfigMapError> {
    validate::validate_with_label(entries, engine, DEFAULT_CONFIGMAP_LABEL_KEY).await
}

/// Create a ConfigMap for every entry, stopping at the first failure
pub async fn create_config_maps(
    entries: &[ConfigMapEntry],
    engine: &EngineDetails<'_>,
) -> Result<(), ConfigMapError> {
    create::create_with_label(entries, engine, DEFAULT_CONFIGMAP_LABEL_KEY).await
}

/// One ConfigMap volume per entry, or `None` when there are no entries to read
pub fn build_volumes(entries: Option<&[ConfigMapEntry]>) -> Option<Vec<Volume>> {
    volumes::volumes_with_mode(entries, DEFAULT_CONFIGMAP_VOLUME_MODE)
}

/// Accepted ConfigMaps with the pod-spec fragments derived from them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedVolumes {
    pub config_maps: Vec<ConfigMapEntry>,
    pub volumes: Vec<Volume>,
    pub volume_mounts: Vec<VolumeMount>,
}

/// Reconciler bound to a configuration
///
/// Same operations as the free functions, but created ConfigMaps and volumes
/// use the configured label key and default mode.
#[derive(Debug, Clone, Default)]
pub struct ConfigMapReconciler {
    config: ReconcilerConfig,
}

impl ConfigMapReconciler {
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    pub async fn check(
        &self,
        engine: &EngineDetails<'_>,
        experiment_name: &str,
    ) -> Result<(bool, Vec<ConfigMapEntry>), ConfigMapError> {
        check_config_maps(engine, experiment_name).await
    }

    pub async fn validate(
        &self,
        entries: &[ConfigMapEntry],
        engine: &EngineDetails<'_>,
    ) -> Result<Vec<ConfigMapEntry>, ConfigMapError> {
        validate::validate_with_label(entries, engine, &self.config.configmap_label_key).await
    }

    pub async fn create(
        &self,
        entries: &[ConfigMapEntry],
        engine: &EngineDetails<'_>,
    ) -> Result<(), ConfigMapError> {
        create::create_with_label(entries, engine, &self.config.configmap_label_key).await
    }

    pub fn volumes(&self, entries: Option<&[ConfigMapEntry]>) -> Option<Vec<Volume>> {
        volumes::volumes_with_mode(entries, self.config.configmap_default_mode)
    }

    pub fn volume_mounts(&self, entries: &[ConfigMapEntry]) -> Vec<VolumeMount> {
        build_volume_mounts(entries)
    }

    /// Check, validate and derive volumes for one experiment
    ///
    /// An experiment without ConfigMaps yields an empty `PreparedVolumes`
    /// and issues no ConfigMap calls.
    pub async fn prepare_experiment(
        &self,
        engine: &EngineDetails<'_>,
        experiment_name: &str,
    ) -> Result<PreparedVolumes, ConfigMapError> {
        let (present, entries) = self.check(engine, experiment_name).await?;
        if !present {
            info!(
                "ChaosExperiment {} declares no ConfigMaps, nothing to mount",
                experiment_name
            );
            return Ok(PreparedVolumes::default());
        }

        let accepted = self.validate(&entries, engine).await?;
        let volumes = self.volumes(Some(accepted.as_slice())).unwrap_or_default();
        let volume_mounts = self.volume_mounts(&accepted);
        info!(
            "Prepared {} ConfigMap volume(s) for ChaosExperiment {}",
            volumes.len(),
            experiment_name
        );

        Ok(PreparedVolumes {
            config_maps: accepted,
            volumes,
            volume_mounts,
        })
    }
}
