//! # CRD Generator
//!
//! Prints the `ChaosExperiment` CustomResourceDefinition as YAML.
//!
//! ```bash
//! cargo run --bin crdgen | kubectl apply -f -
//! ```

use chaos_configmap_reconciler::crd::ChaosExperiment;
use kube::core::CustomResourceExt;

fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&ChaosExperiment::crd())?);
    Ok(())
}
