//! # Logging
//!
//! Tracing subscriber setup driven by `ReconcilerConfig`.

use crate::config::ReconcilerConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `LOG_LEVEL` when set. If a subscriber is already
/// installed this does nothing.
pub fn init_tracing(config: &ReconcilerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    // Already initialised (tests, or an embedding binary) is fine
    let _ = if config.json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Filter directive scoping the configured level to the library and the CLI
fn default_directive(log_level: &str) -> String {
    let level = match log_level.to_ascii_lowercase().as_str() {
        level @ ("error" | "warn" | "info" | "debug" | "trace") => level.to_string(),
        _ => "info".to_string(),
    };
    format!("chaos_configmap_reconciler={level},chaos_configmaps={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_normalises_level() {
        assert_eq!(default_directive("DEBUG"), "chaos_configmap_reconciler=debug,chaos_configmaps=debug");
        assert_eq!(default_directive("Warn"), "chaos_configmap_reconciler=warn,chaos_configmaps=warn");
    }

    #[test]
    fn test_default_directive_unknown_level_is_info() {
        assert_eq!(default_directive("LOUD"), "chaos_configmap_reconciler=info,chaos_configmaps=info");
    }
}
