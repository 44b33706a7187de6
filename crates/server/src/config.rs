use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse `[features]` out of a config file body. Invalid TOML disables
/// every optional feature.
pub fn parse_feature_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Invalid config; optional features off");
            FeatureFlags::default()
        }
    }
}

/// Read `config.toml` once and keep the flags for the process lifetime.
/// Later calls are no-ops.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let flags = parse_feature_flags(&contents);
            tracing::info!(?flags, "Feature flags loaded");
            flags
        }
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "No config file; optional features off");
            FeatureFlags::default()
        }
    });
}

/// Loaded flags, or all-off defaults before `load_feature_flags()` runs.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        api_docs: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}
