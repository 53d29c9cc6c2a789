//! Fuzzy file encoding.
//!
//! Each locale with untranslated text gets a `<locale>.fuzzy` file listing
//! the misses as a JSON object. Values are the source text wrapped in
//! [`PLACEHOLDER_MARKER`] so they stand out from confirmed translations:
//!
//! ```text
//! {
//!   "Open file": "~Open file~",
//!   "Quit": "~Quit~"
//! }
//! ```

use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use super::FlushFailure;
use crate::store::MissTracker;

/// Suffix of generated fuzzy files
pub const FUZZY_FILE_SUFFIX: &str = ".fuzzy";

/// Wraps placeholder values in fuzzy files
pub const PLACEHOLDER_MARKER: char = '~';

/// Outcome of writing fuzzy files.
#[derive(Debug, Default)]
pub struct FlushReport {
    /// Files written successfully
    pub written: Vec<PathBuf>,
    /// Locales whose file could not be written
    pub failed: Vec<FlushFailure>,
}

impl FlushReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// `<locale>.fuzzy`
#[must_use]
pub fn fuzzy_file_name(locale: &str) -> String {
    format!("{locale}{FUZZY_FILE_SUFFIX}")
}

/// Render misses in first-seen order, one `"text": "~text~"` pair per line.
#[must_use]
pub fn encode_fuzzy(misses: &[String]) -> String {
    let pairs: Vec<String> = misses
        .iter()
        .map(|text| {
            let key = Value::String(text.clone());
            let placeholder =
                Value::String(format!("{PLACEHOLDER_MARKER}{text}{PLACEHOLDER_MARKER}"));
            format!("  {key}: {placeholder}")
        })
        .collect();

    if pairs.is_empty() {
        return "{\n}\n".to_string();
    }
    format!("{{\n{}\n}}\n", pairs.join(",\n"))
}

/// Write one fuzzy file per locale in `tracker` into `dir`.
///
/// Existing files are overwritten. A locale that fails to write is logged
/// and reported without stopping the others.
pub fn write_fuzzy_files(dir: &Path, tracker: &MissTracker) -> FlushReport {
    let mut report = FlushReport::default();

    for locale in tracker.locales() {
        let misses = tracker.entries(locale);
        let path = dir.join(fuzzy_file_name(locale));

        match std::fs::write(&path, encode_fuzzy(misses)) {
            Ok(()) => {
                tracing::debug!(
                    %locale,
                    path = %path.display(),
                    misses = misses.len(),
                    "Wrote fuzzy file"
                );
                report.written.push(path);
            }
            Err(source) => {
                let failure = FlushFailure { locale: locale.to_string(), path, source };
                tracing::error!("{failure}");
                report.failed.push(failure);
            }
        }
    }

    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;

    fn misses(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| (*text).to_string()).collect()
    }

    #[googletest::test]
    fn test_encode_fuzzy_layout() {
        let encoded = encode_fuzzy(&misses(&["A", "B"]));

        expect_that!(encoded, eq("{\n  \"A\": \"~A~\",\n  \"B\": \"~B~\"\n}\n"));
    }

    #[googletest::test]
    fn test_encode_fuzzy_empty() {
        expect_that!(encode_fuzzy(&[]), eq("{\n}\n"));
    }

    #[googletest::test]
    fn test_encode_fuzzy_is_valid_json() {
        let encoded = encode_fuzzy(&misses(&["Say \"hi\"", "line\nbreak", "back\\slash", "Привет"]));

        let parsed: HashMap<String, String> = serde_json::from_str(&encoded).unwrap();

        expect_that!(parsed.get("Say \"hi\""), some(eq(&"~Say \"hi\"~".to_string())));
        expect_that!(parsed.get("line\nbreak"), some(eq(&"~line\nbreak~".to_string())));
        expect_that!(parsed.get("back\\slash"), some(eq(&"~back\\slash~".to_string())));
        expect_that!(parsed.get("Привет"), some(eq(&"~Привет~".to_string())));
    }

    #[googletest::test]
    fn test_write_fuzzy_files_per_locale() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracker = MissTracker::new();
        tracker.record("it", "A");
        tracker.record("it", "B");
        tracker.record("ru", "C");

        let report = write_fuzzy_files(temp_dir.path(), &tracker);

        expect_that!(report.is_success(), eq(true));
        expect_that!(report.written.len(), eq(2));
        let it = fs::read_to_string(temp_dir.path().join("it.fuzzy")).unwrap();
        expect_that!(it, eq(&encode_fuzzy(&misses(&["A", "B"]))));
        let ru = fs::read_to_string(temp_dir.path().join("ru.fuzzy")).unwrap();
        expect_that!(ru, eq(&encode_fuzzy(&misses(&["C"]))));
    }

    #[googletest::test]
    fn test_write_fuzzy_files_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("it.fuzzy"), "stale content that is longer").unwrap();
        let mut tracker = MissTracker::new();
        tracker.record("it", "A");

        let report = write_fuzzy_files(temp_dir.path(), &tracker);

        expect_that!(report.is_success(), eq(true));
        let it = fs::read_to_string(temp_dir.path().join("it.fuzzy")).unwrap();
        expect_that!(it, eq(&encode_fuzzy(&misses(&["A"]))));
    }

    #[googletest::test]
    fn test_write_failure_does_not_stop_other_locales() {
        let temp_dir = TempDir::new().unwrap();
        // a directory where the file should go makes the write fail
        fs::create_dir(temp_dir.path().join("es.fuzzy")).unwrap();
        let mut tracker = MissTracker::new();
        tracker.record("es", "A");
        tracker.record("it", "B");

        let report = write_fuzzy_files(temp_dir.path(), &tracker);

        expect_that!(report.is_success(), eq(false));
        expect_that!(report.failed.len(), eq(1));
        assert_eq!(report.failed[0].locale, "es");
        assert_eq!(report.written, vec![temp_dir.path().join("it.fuzzy")]);
        let it = fs::read_to_string(temp_dir.path().join("it.fuzzy")).unwrap();
        expect_that!(it, eq(&encode_fuzzy(&misses(&["B"]))));
    }
}
