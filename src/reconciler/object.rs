//! # ConfigMap Object
//!
//! Builds the core/v1 ConfigMap created for an entry that is missing from the cluster.

use crate::crd::ConfigMapEntry;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Build the ConfigMap object for an entry
///
/// The object is named after the entry, labelled `{label_key: <name>}` and
/// carries the entry's inline data. Namespace is left unset; the namespaced
/// API the object is posted to supplies it.
pub fn build_config_map_object(entry: &ConfigMapEntry, label_key: &str) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(entry.name.clone()),
            labels: Some(BTreeMap::from([(
                label_key.to_string(),
                entry.name.clone(),
            )])),
            ..Default::default()
        },
        data: entry.data.clone(),
        ..Default::default()
    }
}
