//! Locale file decoding.
//!
//! A locale file is named `<locale>.json` and holds a flat JSON object whose
//! keys are source strings and whose values are their translations:
//!
//! ```json
//! { "Hello, world!": "Привет, мир!" }
//! ```

use std::collections::HashMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use super::LocaleFileError;

/// Suffix every locale file carries
pub const LOCALE_FILE_SUFFIX: &str = ".json";

/// Decoded contents of one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Locale identifier derived from the file name
    pub locale: String,
    /// Path the file was read from
    pub path: PathBuf,
    /// Source string -> translation
    pub entries: HashMap<String, String>,
}

/// Append [`LOCALE_FILE_SUFFIX`] unless `path` already ends with it.
///
/// # Examples
/// - `locales/ru` → `locales/ru.json`
/// - `locales/ru.json` → `locales/ru.json`
#[must_use]
pub fn resolve_locale_path(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(LOCALE_FILE_SUFFIX) {
        return path.to_path_buf();
    }
    let mut with_suffix = OsString::from(path.as_os_str());
    with_suffix.push(LOCALE_FILE_SUFFIX);
    PathBuf::from(with_suffix)
}

/// Locale identifier of a locale file: the file name without directory and suffix.
#[must_use]
pub fn locale_id_from_path(path: &Path) -> String {
    let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    file_name.strip_suffix(LOCALE_FILE_SUFFIX).unwrap_or(&file_name).to_string()
}

/// Decode locale file content.
///
/// Only a flat object of string values is accepted; nested objects, arrays,
/// numbers and the like are rejected instead of being coerced.
pub fn decode_locale_json(
    path: &Path,
    content: &str,
) -> Result<HashMap<String, String>, LocaleFileError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|source| LocaleFileError::Malformed { path: path.to_path_buf(), source })?;

    let Value::Object(map) = json else {
        return Err(LocaleFileError::NotAnObject { path: path.to_path_buf() });
    };

    let mut entries = HashMap::with_capacity(map.len());
    for (key, value) in map {
        let Value::String(translation) = value else {
            return Err(LocaleFileError::NonStringValue { path: path.to_path_buf(), key });
        };
        entries.insert(key, translation);
    }

    Ok(entries)
}

/// Read and decode a single locale file.
///
/// The suffix is appended to `path` when missing, so both `locales/ru` and
/// `locales/ru.json` name the same file.
pub fn read_locale_file(path: &Path) -> Result<LocaleFile, LocaleFileError> {
    let path = resolve_locale_path(path);

    let content = std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LocaleFileError::Missing { path: path.clone() }
        } else {
            LocaleFileError::Io { path: path.clone(), source }
        }
    })?;

    let entries = decode_locale_json(&path, &content)?;
    let locale = locale_id_from_path(&path);
    tracing::debug!(
        %locale,
        path = %path.display(),
        entries = entries.len(),
        "Decoded locale file"
    );

    Ok(LocaleFile { locale, path, entries })
}

/// List the locale files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into.
pub fn locale_files_in(dir: &Path) -> Result<Vec<PathBuf>, LocaleFileError> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LocaleFileError::Missing { path: dir.to_path_buf() }
        } else {
            LocaleFileError::Io { path: dir.to_path_buf(), source }
        }
    })?;

    let mut files = Vec::new();
    for result in read_dir {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.len() > LOCALE_FILE_SUFFIX.len() && name.ends_with(LOCALE_FILE_SUFFIX) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
