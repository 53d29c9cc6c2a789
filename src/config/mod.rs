//! Settings for embedding the translator
/// Settings file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::{
    SETTINGS_FILE_NAME,
    load_from_dir,
    load_settings,
};
pub use types::{
    ConfigError,
    Settings,
    ValidationError,
};
