pub mod config;
pub mod display_spec;

pub use config::{AppConfig, ConfigOverrides};
pub use display_spec::DisplaySpec;
