//! Translation façade.
//!
//! [`Translator`] owns the translation tables, the miss log and the default
//! locale. Embedding applications load locale files once at startup, call
//! [`Translator::translate`] for every user-facing string and call
//! [`Translator::flush_misses`] before exiting.

use std::path::{
    Path,
    PathBuf,
};

use crate::codec::fuzzy_file::write_fuzzy_files;
use crate::codec::locale_file::{
    locale_files_in,
    read_locale_file,
};
use crate::codec::{
    FlushReport,
    LocaleFile,
    LocaleFileError,
};
use crate::config::Settings;
use crate::store::{
    LocaleStore,
    MissTracker,
};

/// Locale the source strings are written in; translating to it is the identity.
pub const BASE_LOCALE: &str = "en_US";

/// Outcome of loading every locale file in a directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Locales loaded, in load order
    pub loaded: Vec<String>,
    /// Files that were skipped
    pub failed: Vec<LocaleFileError>,
}

/// Looks up translations and records text that has none.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Locale used when none is passed
    default_locale: String,
    /// Where fuzzy files are written
    fuzzy_dir: PathBuf,
    /// Loaded translations
    store: LocaleStore,
    /// Text requested without a translation
    misses: MissTracker,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Translator with the base locale as default, writing fuzzy files to the
    /// current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fuzzy_dir(".")
    }

    #[must_use]
    pub fn with_fuzzy_dir(fuzzy_dir: impl Into<PathBuf>) -> Self {
        Self {
            default_locale: BASE_LOCALE.to_string(),
            fuzzy_dir: fuzzy_dir.into(),
            store: LocaleStore::new(),
            misses: MissTracker::new(),
        }
    }

    /// Translator configured from `settings`, with the locales directory
    /// loaded if one is set.
    ///
    /// # Errors
    /// Fails only if the locales directory cannot be listed; broken locale
    /// files inside it are skipped.
    pub fn from_settings(settings: &Settings) -> Result<Self, LocaleFileError> {
        let mut translator = Self::with_fuzzy_dir(&settings.fuzzy_dir);
        translator.set_default_locale(&settings.default_locale);

        if let Some(dir) = &settings.locales_dir {
            translator.load_all_locales(dir)?;
        }

        Ok(translator)
    }

    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn set_default_locale(&mut self, locale: impl Into<String>) {
        self.default_locale = locale.into();
        tracing::debug!(locale = %self.default_locale, "Default locale set");
    }

    #[must_use]
    pub fn fuzzy_dir(&self) -> &Path {
        &self.fuzzy_dir
    }

    #[must_use]
    pub const fn store(&self) -> &LocaleStore {
        &self.store
    }

    #[must_use]
    pub const fn misses(&self) -> &MissTracker {
        &self.misses
    }

    /// Translate `text` into `locale`.
    ///
    /// An empty `locale` means the default locale. Text without a
    /// translation is returned unchanged and remembered as a miss; the base
    /// locale never has misses.
    pub fn translate(&mut self, text: &str, locale: &str) -> String {
        let locale = if locale.is_empty() { self.default_locale.as_str() } else { locale };

        if locale == BASE_LOCALE {
            return text.to_string();
        }

        if let Some(translation) = self.store.lookup(locale, text) {
            return translation.to_string();
        }

        if self.misses.record(locale, text) {
            tracing::debug!(%locale, text, "Missing translation");
        }
        text.to_string()
    }

    /// Alias of [`Translator::translate`].
    pub fn tr(&mut self, text: &str, locale: &str) -> String {
        self.translate(text, locale)
    }

    /// Translate `text` into the default locale.
    pub fn translate_default(&mut self, text: &str) -> String {
        self.translate(text, "")
    }

    /// Load one locale file, returning the number of entries read.
    ///
    /// `path` may omit the `.json` suffix. Entries override translations
    /// already loaded for the same locale.
    ///
    /// # Errors
    /// Missing, unreadable or malformed file.
    pub fn load_locale_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LocaleFileError> {
        let file = read_locale_file(path.as_ref())?;
        Ok(self.insert(file))
    }

    /// Load every `<locale>.json` file directly inside `dir`.
    ///
    /// A file that cannot be loaded is logged and skipped; the rest of the
    /// directory is still loaded.
    ///
    /// # Errors
    /// Only when `dir` itself cannot be listed.
    pub fn load_all_locales(
        &mut self,
        dir: impl AsRef<Path>,
    ) -> Result<LoadReport, LocaleFileError> {
        let dir = dir.as_ref();
        let mut report = LoadReport::default();

        for path in locale_files_in(dir)? {
            match read_locale_file(&path) {
                Ok(file) => {
                    let locale = file.locale.clone();
                    self.insert(file);
                    report.loaded.push(locale);
                }
                Err(err) => {
                    tracing::warn!("Skipping locale file: {err}");
                    report.failed.push(err);
                }
            }
        }

        tracing::debug!(
            dir = %dir.display(),
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "Loaded locale directory"
        );
        Ok(report)
    }

    /// Write a `<locale>.fuzzy` file for every locale with misses.
    ///
    /// Write failures are logged and reported per locale, never returned as
    /// an error.
    pub fn flush_misses(&self) -> FlushReport {
        write_fuzzy_files(&self.fuzzy_dir, &self.misses)
    }

    /// Add a decoded file to the store, returning the entry count.
    fn insert(&mut self, file: LocaleFile) -> usize {
        if file.locale == BASE_LOCALE {
            tracing::warn!(
                path = %file.path.display(),
                "Ignoring locale file for the base locale {BASE_LOCALE}"
            );
            return 0;
        }

        let count = file.entries.len();
        self.store.load(&file.locale, file.entries);
        tracing::debug!(locale = %file.locale, entries = count, "Loaded locale file");
        count
    }
}
