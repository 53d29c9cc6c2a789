//! Translation table keyed by locale identifier.

use std::collections::HashMap;

/// Per-locale mapping from source string to translated string.
///
/// Entries are only added through [`LocaleStore::load`]. Loading the same
/// locale twice merges the tables, later values replacing earlier ones.
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    /// locale -> (source -> translation)
    tables: HashMap<String, HashMap<String, String>>,
}

impl LocaleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `entries` into the table for `locale`.
    pub fn load<I>(&mut self, locale: &str, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let table = self.tables.entry(locale.to_string()).or_default();
        for (source, translation) in entries {
            if let Some(previous) = table.insert(source, translation) {
                tracing::trace!(locale, %previous, "Overriding translation");
            }
        }
    }

    /// Exact-match lookup. Unknown locales behave like empty tables.
    #[must_use]
    pub fn lookup(&self, locale: &str, source: &str) -> Option<&str> {
        self.tables.get(locale)?.get(source).map(String::as_str)
    }

    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Number of entries loaded for `locale`.
    #[must_use]
    pub fn len(&self, locale: &str) -> usize {
        self.tables.get(locale).map_or(0, HashMap::len)
    }

    /// Loaded locale identifiers, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}
