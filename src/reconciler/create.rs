//! # Creation
//!
//! Unconditional creation of every declared ConfigMap.

use crate::crd::ConfigMapEntry;
use crate::engine::EngineDetails;
use crate::error::ConfigMapError;
use crate::observability::metrics;
use crate::reconciler::object::build_config_map_object;
use tracing::{error, info};

/// Create a ConfigMap for every entry without checking for an existing one
///
/// Stops at the first rejected create; later entries are not attempted.
pub(crate) async fn create_with_label(
    entries: &[ConfigMapEntry],
    engine: &EngineDetails<'_>,
    label_key: &str,
) -> Result<(), ConfigMapError> {
    let namespace = engine.app_namespace.as_str();

    for entry in entries {
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
        info!("Created ConfigMap {}/{}", namespace, entry.name);
    }

    Ok(())
}
