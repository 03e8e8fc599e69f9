//! # Validation
//!
//! Existence-check-then-create loop over the ConfigMaps an experiment declares.

use crate::crd::ConfigMapEntry;
use crate::engine::EngineDetails;
use crate::error::ConfigMapError;
use crate::observability::metrics;
use crate::reconciler::object::build_config_map_object;
use tracing::{error, info, warn};

/// Result of a validation batch in list form
///
/// `accepted` is empty whenever `errors` is not; the batch aborts on the first error.
#[derive(Debug, Default)]
pub struct ValidationOutcome {
    pub accepted: Vec<ConfigMapEntry>,
    pub errors: Vec<ConfigMapError>,
}

impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigMapError] {
        &self.errors
    }
}

impl From<Result<Vec<ConfigMapEntry>, ConfigMapError>> for ValidationOutcome {
    fn from(result: Result<Vec<ConfigMapEntry>, ConfigMapError>) -> Self {
        match result {
            Ok(accepted) => Self {
                accepted,
                errors: Vec::new(),
            },
            Err(e) => Self {
                accepted: Vec::new(),
                errors: vec![e],
            },
        }
    }
}

/// Validate every entry, creating missing ConfigMaps that carry inline data
///
/// Entries are processed in order and the first failure aborts the batch:
/// - empty name or mount path: `InvalidEntry`
/// - found in the cluster: accepted, no create issued
/// - not found, data present: created and accepted, or `CreationFailed`
/// - not found, no data: `MissingData`
/// - lookup failed with anything but 404: `LookupFailed`
pub(crate) async fn validate_with_label(
    entries: &[ConfigMapEntry],
    engine: &EngineDetails<'_>,
    label_key: &str,
) -> Result<Vec<ConfigMapEntry>, ConfigMapError> {
    let result = validate_inner(entries, engine, label_key).await;
    if result.is_err() {
        metrics::increment_validation_errors();
    }
    result
}

async fn validate_inner(
    entries: &[ConfigMapEntry],
    engine: &EngineDetails<'_>,
    label_key: &str,
) -> Result<Vec<ConfigMapEntry>, ConfigMapError> {
    let namespace = engine.app_namespace.as_str();
    let mut accepted = Vec::with_capacity(entries.len());

    for entry in entries {
        if !entry.is_valid() {
            info!(
                "Unable to validate the ConfigMap, with name: {:?}, with mountPath: {:?}",
                entry.name, entry.mount_path
            );
            return Err(ConfigMapError::InvalidEntry {
                name: entry.name.clone(),
                mount_path: entry.mount_path.clone(),
            });
        }

        let existing = engine
            .client
            .get_config_map(namespace, &entry.name)
            .await
            .map_err(|e| {
                warn!(
                    "Lookup of ConfigMap {}/{} failed: {:#}",
                    namespace, entry.name, e
                );
                ConfigMapError::LookupFailed {
                    name: entry.name.clone(),
                    namespace: namespace.to_string(),
                    source: e,
                }
            })?;

        if existing.is_none() {
            info!("Unable to find ConfigMap with name: {}", entry.name);

            if !entry.has_data() {
                info!(
                    "ConfigMap {} not found and has no data to build it from, aborting",
                    entry.name
                );
                return Err(ConfigMapError::MissingData {
                    name: entry.name.clone(),
                });
            }

            info!("Will try to build ConfigMap with name: {}", entry.name);
            let object = build_config_map_object(entry, label_key);
            if let Err(e) = engine.client.create_config_map(namespace, &object).await {
                error!("Unable to create ConfigMap {}/{}: {:#}", namespace, entry.name, e);
                return Err(ConfigMapError::CreationFailed {
                    name: entry.name.clone(),
                    namespace: namespace.to_string(),
                    source: e,
                });
            }
            metrics::increment_created();
            info!("Successfully created ConfigMap with name: {}", entry.name);
        }

        accepted.push(entry.clone());
        metrics::increment_validated();
        info!("Successfully validated the ConfigMap with name: {}", entry.name);
    }

    Ok(accepted)
}
