//! # Metrics
//!
//! Prometheus metrics for monitoring the reconciler.
//!
//! ## Metrics Exposed
//!
//! - `chaos_configmaps_validated_total` - ConfigMap entries accepted by validation
//! - `chaos_configmaps_created_total` - ConfigMaps created in the cluster
//! - `chaos_configmaps_validation_errors_total` - Validation batches aborted by an error

use anyhow::Result;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static CONFIGMAPS_VALIDATED_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "chaos_configmaps_validated_total",
        "Total number of ConfigMap entries accepted by validation",
    )
    .expect("Failed to create CONFIGMAPS_VALIDATED_TOTAL metric - this should never happen")
});

static CONFIGMAPS_CREATED_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "chaos_configmaps_created_total",
        "Total number of ConfigMaps created in the cluster",
    )
    .expect("Failed to create CONFIGMAPS_CREATED_TOTAL metric - this should never happen")
});

static VALIDATION_ERRORS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "chaos_configmaps_validation_errors_total",
        "Total number of validation batches aborted by an error",
    )
    .expect("Failed to create VALIDATION_ERRORS_TOTAL metric - this should never happen")
});

/// Register all counters with the crate registry
///
/// Calling it again is harmless.
pub fn register_metrics() -> Result<()> {
    let collectors: [Box<dyn prometheus::core::Collector>; 3] = [
        Box::new(CONFIGMAPS_VALIDATED_TOTAL.clone()),
        Box::new(CONFIGMAPS_CREATED_TOTAL.clone()),
        Box::new(VALIDATION_ERRORS_TOTAL.clone()),
    ];
    for collector in collectors {
        match REGISTRY.register(collector) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Render registered metrics in the Prometheus text exposition format
pub fn gather_metrics() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn increment_validated() {
    CONFIGMAPS_VALIDATED_TOTAL.inc();
}

pub fn increment_created() {
    CONFIGMAPS_CREATED_TOTAL.inc();
}

pub fn increment_validation_errors() {
    VALIDATION_ERRORS_TOTAL.inc();
}
