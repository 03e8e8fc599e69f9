//! # Constants
//!
//! Shared constants used throughout the reconciler.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Namespace used when neither the CLI nor the environment names one
pub const DEFAULT_APP_NAMESPACE: &str = "default";

/// Label key stamped on every ConfigMap the reconciler creates
/// The value is the ConfigMap's own name
pub const DEFAULT_CONFIGMAP_LABEL_KEY: &str = "Experiment";

/// File mode for keys projected from a ConfigMap volume (0644 octal)
pub const DEFAULT_CONFIGMAP_VOLUME_MODE: i32 = 420;

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "text";
