//! Test application factory for integration tests.

use std::sync::{Arc, Once};

use epd_conv::{AppConfig, Converter};

static TRACING: Once = Once::new();

/// Install a log subscriber once per test binary; filter with RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "epd_conv=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Converter wired to a configuration, with the config kept for assertions
pub struct TestApp {
    pub config: Arc<AppConfig>,
    pub converter: Converter,
}

impl TestApp {
    /// Create a test app with the built-in displays and palettes
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test app from a YAML document merged over the defaults
    pub fn from_yaml(yaml: &str) -> Self {
        let config = AppConfig::from_yaml_str(yaml).expect("Test config should be valid");
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        init_tracing();
        let config = Arc::new(config);
        let converter = Converter::new(config.clone());
        Self { config, converter }
    }
}
