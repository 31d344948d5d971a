//! Workspace configuration for locale selection and overrides
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    LocaleSettings,
    ValidationError,
};
