use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::translator::BASE_LOCALE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fuzzyDir")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Locale used when `translate` is called without one.
    pub default_locale: String,

    /// Directory scanned for `<locale>.json` files at startup.
    /// If unset, no locale files are loaded.
    pub locales_dir: Option<PathBuf>,

    /// Directory `<locale>.fuzzy` files are written to.
    pub fuzzy_dir: PathBuf,
}

impl Settings {
    /// # Errors
    /// - Default locale is empty
    /// - Fuzzy directory is empty
    /// - Locales directory is set but empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_locale.is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!(
                    "The locale cannot be empty. Remove this field to use the base locale \"{BASE_LOCALE}\""
                ),
            ));
        }

        if let Some(dir) = &self.locales_dir
            && dir.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Please specify a path (e.g., \"locales\"), or remove this field",
            ));
        }

        if self.fuzzy_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "fuzzyDir",
                "The directory cannot be empty. Example: \".\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: BASE_LOCALE.to_string(),
            locales_dir: None,
            fuzzy_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = Settings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultLocale": "ru_RU", "localesDir": "locales"}"#;

        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_locale, eq("ru_RU"));
        assert_eq!(settings.locales_dir, Some(PathBuf::from("locales")));
        assert_eq!(settings.fuzzy_dir, PathBuf::from("."));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: Settings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, Settings::default());
        assert_that!(settings.default_locale, eq(BASE_LOCALE));
    }

    #[rstest]
    fn validate_invalid_default_locale_empty() {
        let settings = Settings { default_locale: String::new(), ..Settings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultLocale")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_locales_dir_empty() {
        let settings = Settings { locales_dir: Some(PathBuf::new()), ..Settings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("localesDir")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = Settings {
            default_locale: String::new(),
            fuzzy_dir: PathBuf::new(),
            ..Settings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. defaultLocale"));
        assert_that!(error_message, contains_substring("2. fuzzyDir"));
    }
}
