//! # CRD Tests
//!
//! ChaosExperiment manifests deserialize the way the reconciler expects.

use chaos_configmap_reconciler::crd::{ChaosExperiment, ConfigMapEntry};
use chaos_configmap_reconciler::reconciler::{build_volume_mounts, build_volumes};
use kube::core::CustomResourceExt;

const POD_DELETE: &str = r#"
apiVersion: litmuschaos.io/v1alpha1
kind: ChaosExperiment
metadata:
  name: pod-delete
  namespace: litmus
spec:
  definition:
    scope: Namespaced
    image: litmuschaos/go-runner:latest
    imagePullPolicy: Always
    command:
      - /bin/bash
    args:
      - -c
      - ./experiments -name pod-delete
    labels:
      name: pod-delete
    env:
      - name: TOTAL_CHAOS_DURATION
        value: "15"
    configmaps:
      - name: experiment-data
        mountPath: /mnt
        data:
          parameters.yml: |
            duration: 60
      - name: shared-scripts
        mountPath: /scripts
"#;

#[test]
fn test_pod_delete_experiment_deserializes() {
    let experiment: ChaosExperiment =
        serde_yaml::from_str(POD_DELETE).expect("Should deserialize ChaosExperiment");

    let definition = &experiment.spec.definition;
    assert_eq!(definition.image, "litmuschaos/go-runner:latest");
    assert_eq!(definition.image_pull_policy.as_deref(), Some("Always"));
    assert_eq!(definition.env[0].name, "TOTAL_CHAOS_DURATION");
    assert_eq!(definition.env[0].value, "15");
    assert_eq!(definition.configmaps.len(), 2);

    let data_entry = &definition.configmaps[0];
    assert_eq!(data_entry.name, "experiment-data");
    assert_eq!(data_entry.mount_path, "/mnt");
    assert!(data_entry.has_data());
    assert!(!definition.configmaps[1].has_data());
}

#[test]
fn test_definition_without_configmaps_defaults_to_empty() {
    let yaml = r#"
apiVersion: litmuschaos.io/v1alpha1
kind: ChaosExperiment
metadata:
  name: node-drain
spec:
  definition:
    image: litmuschaos/go-runner:latest
"#;
    let experiment: ChaosExperiment = serde_yaml::from_str(yaml).unwrap();
    assert!(experiment.spec.definition.configmaps.is_empty());
    assert!(experiment.spec.definition.args.is_empty());
}

#[test]
fn test_entry_missing_mount_path_deserializes_as_invalid() {
    let entry: ConfigMapEntry = serde_yaml::from_str("name: orphan\n").unwrap();
    assert_eq!(entry.mount_path, "");
    assert!(!entry.is_valid());
}

#[test]
fn test_declared_configmaps_project_into_pod_fragments() {
    let experiment: ChaosExperiment = serde_yaml::from_str(POD_DELETE).unwrap();
    let entries = experiment.spec.definition.configmaps;

    let volumes = build_volumes(Some(entries.as_slice())).unwrap();
    let mounts = build_volume_mounts(&entries);

    assert_eq!(volumes.len(), 2);
    assert_eq!(
        volumes[1].config_map.as_ref().map(|c| c.name.as_str()),
        Some("shared-scripts")
    );
    assert_eq!(mounts[1].mount_path, "/scripts");
    assert!(build_volumes(None).is_none());
}

#[test]
fn test_generated_crd_identity() {
    let crd = ChaosExperiment::crd();
    assert_eq!(crd.spec.group, "litmuschaos.io");
    assert_eq!(crd.spec.names.kind, "ChaosExperiment");
    assert_eq!(crd.spec.scope, "Namespaced");
    assert_eq!(crd.spec.versions[0].name, "v1alpha1");
    assert_eq!(
        crd.spec.names.short_names.as_deref(),
        Some(&["chexp".to_string()][..])
    );
}
