//! # Reconciler Configuration
//!
//! Reconciler-level settings loaded from environment variables.

/// Reconciler-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilerConfig {
    /// Namespace the experiment and its ConfigMaps live in when the caller does not say
    pub app_namespace: String,
    /// Label key applied to created ConfigMaps (value is the ConfigMap name)
    pub configmap_label_key: String,
    /// `defaultMode` for generated ConfigMap volumes
    pub configmap_default_mode: i32,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            app_namespace: DEFAULT_APP_NAMESPACE.to_string(),
            configmap_label_key: DEFAULT_CONFIGMAP_LABEL_KEY.to_string(),
            configmap_default_mode: DEFAULT_CONFIGMAP_VOLUME_MODE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            enable_metrics: true,
        }
    }
}

impl ReconcilerConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        use crate::constants::*;
        Self {
            app_namespace: or_default_str(lookup("APP_NAMESPACE"), DEFAULT_APP_NAMESPACE),
            configmap_label_key: or_default_str(
                lookup("CONFIGMAP_LABEL_KEY"),
                DEFAULT_CONFIGMAP_LABEL_KEY,
            ),
            configmap_default_mode: or_default(
                lookup("CONFIGMAP_DEFAULT_MODE"),
                DEFAULT_CONFIGMAP_VOLUME_MODE,
            ),
            log_level: or_default_str(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL),
            log_format: or_default_str(lookup("LOG_FORMAT"), DEFAULT_LOG_FORMAT),
            enable_metrics: or_default_bool(lookup("ENABLE_METRICS"), true),
        }
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Parse a raw value or return the default
fn or_default<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Parse a raw value as boolean or return the default
fn or_default_bool(raw: Option<String>, default: bool) -> bool {
    raw.map(|v| {
        let v_lower = v.to_lowercase();
        v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
    })
    .unwrap_or(default)
}

/// Take a raw value as string or return the default
///
/// Empty values count as unset.
fn or_default_str(raw: Option<String>, default: &str) -> String {
    raw.filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ReconcilerConfig::from_lookup(|_| None);
        assert_eq!(config, ReconcilerConfig::default());
        assert_eq!(config.configmap_label_key, "Experiment");
        assert_eq!(config.configmap_default_mode, 420);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ReconcilerConfig::from_lookup(lookup_from(&[
            ("APP_NAMESPACE", "litmus"),
            ("CONFIGMAP_LABEL_KEY", "chaos.io/experiment"),
            ("CONFIGMAP_DEFAULT_MODE", "292"),
            ("LOG_FORMAT", "JSON"),
            ("ENABLE_METRICS", "off"),
        ]));
        assert_eq!(config.app_namespace, "litmus");
        assert_eq!(config.configmap_label_key, "chaos.io/experiment");
        assert_eq!(config.configmap_default_mode, 292);
        assert!(config.json_logs());
        assert!(!config.enable_metrics);
    }

    #[test]
    fn test_unparseable_mode_falls_back() {
        let config =
            ReconcilerConfig::from_lookup(lookup_from(&[("CONFIGMAP_DEFAULT_MODE", "rw-r--r--")]));
        assert_eq!(config.configmap_default_mode, 420);
    }

    #[test]
    fn test_bool_parsing() {
        for raw in ["true", "1", "YES", "On"] {
            assert!(or_default_bool(Some(raw.to_string()), false), "{raw}");
        }
        for raw in ["false", "0", "no", "nope"] {
            assert!(!or_default_bool(Some(raw.to_string()), true), "{raw}");
        }
        assert!(or_default_bool(None, true));
    }

    #[test]
    fn test_empty_namespace_counts_as_unset() {
        let config = ReconcilerConfig::from_lookup(lookup_from(&[("APP_NAMESPACE", "")]));
        assert_eq!(config.app_namespace, "default");
    }
}
