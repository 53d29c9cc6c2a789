use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading locale files
#[derive(Error, Debug)]
pub enum LocaleFileError {
    /// The locale file or directory does not exist
    #[error("Locale file not found: {}", .path.display())]
    Missing { path: PathBuf },
    /// Reading the file or listing the directory failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The content is not valid JSON
    #[error("Failed to parse locale file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The top-level JSON value is not an object
    #[error("Locale file {} must contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },
    /// A translation value is not a string
    #[error("Translation for '{key}' in {} is not a string", .path.display())]
    NonStringValue { path: PathBuf, key: String },
}

/// A fuzzy file that could not be written
#[derive(Error, Debug)]
#[error("Failed to write fuzzy file for '{locale}' to {}: {source}", .path.display())]
pub struct FlushFailure {
    pub locale: String,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
