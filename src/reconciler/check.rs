//! # Reference Check
//!
//! Reads the ConfigMaps an experiment declares.

use crate::crd::ConfigMapEntry;
use crate::engine::EngineDetails;
use crate::error::ConfigMapError;
use tracing::{debug, warn};

/// Report whether the named ChaosExperiment declares any ConfigMaps
///
/// Returns `(true, entries)` when it does and `(false, [])` otherwise.
/// A failed read surfaces as `ExperimentLookupFailed`.
pub async fn check_config_maps(
    engine: &EngineDetails<'_>,
    experiment_name: &str,
) -> Result<(bool, Vec<ConfigMapEntry>), ConfigMapError> {
    let namespace = engine.app_namespace.as_str();
    let experiment = engine
        .client
        .get_chaos_experiment(namespace, experiment_name)
        .await
        .map_err(|e| {
            warn!(
                "Unable to get ChaosExperiment {}/{}: {:#}",
                namespace, experiment_name, e
            );
            ConfigMapError::ExperimentLookupFailed {
                name: experiment_name.to_string(),
                namespace: namespace.to_string(),
                source: e,
            }
        })?;

    let entries = experiment.spec.definition.configmaps;
    debug!(
        "ChaosExperiment {}/{} declares {} ConfigMap(s)",
        namespace,
        experiment_name,
        entries.len()
    );
    if entries.is_empty() {
        Ok((false, Vec::new()))
    } else {
        Ok((true, entries))
    }
}
