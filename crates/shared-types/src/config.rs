use serde::{Deserialize, Serialize};

/// Optional integrations toggled from `config.toml`.
///
/// Every field defaults to `false` so a missing or partial file leaves
/// the integration off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the Scalar API reference at `/docs`.
    #[serde(default)]
    pub api_docs: bool,
}

/// Top-level `config.toml` layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
