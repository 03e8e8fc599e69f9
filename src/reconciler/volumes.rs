//! # Volumes
//!
//! Pod-spec fragments projecting accepted ConfigMaps into the runner container.

use crate::crd::ConfigMapEntry;
use k8s_openapi::api::core::v1::{ConfigMapVolumeSource, Volume, VolumeMount};
use tracing::info;

/// One ConfigMap volume per entry, named after the entry, in input order
///
/// Returns `None` when there is no entry list at all.
pub(crate) fn volumes_with_mode(
    entries: Option<&[ConfigMapEntry]>,
    default_mode: i32,
) -> Option<Vec<Volume>> {
    let Some(entries) = entries else {
        info!("No experiment ConfigMaps available to create volumes from");
        return None;
    };

    Some(
        entries
            .iter()
            .map(|entry| Volume {
                name: entry.name.clone(),
                config_map: Some(ConfigMapVolumeSource {
                    name: entry.name.clone(),
                    default_mode: Some(default_mode),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .collect(),
    )
}

/// One mount per entry pairing its name with its mount path, in input order
pub fn build_volume_mounts(entries: &[ConfigMapEntry]) -> Vec<VolumeMount> {
    entries
        .iter()
        .map(|entry| VolumeMount {
            name: entry.name.clone(),
            mount_path: entry.mount_path.clone(),
            ..Default::default()
        })
        .collect()
}
