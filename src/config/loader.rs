//! Settings file loading

use std::path::Path;

use super::{
    ConfigError,
    Settings,
};

/// Name of the settings file looked up in a directory
pub const SETTINGS_FILE_NAME: &str = ".fuzzy-translator.json";

/// Read the settings file from `dir`
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: there is no settings file
/// - `Err(ConfigError)`: read or parse failure
pub fn load_from_dir(dir: &Path) -> Result<Option<Settings>, ConfigError> {
    let config_path = dir.join(SETTINGS_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: Settings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// Settings from `dir`, falling back to defaults, validated
///
/// # Errors
/// - File read or JSON parse failure
/// - Validation failure
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    let settings = load_from_dir(dir)?.unwrap_or_default();

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded successfully: {:?}", settings);

    Ok(settings)
}
