pub mod config;
pub mod display_spec;

pub use config::{AppConfig, DisplayConfig};
pub use display_spec::DisplaySpec;
