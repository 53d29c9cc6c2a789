//! Untranslated text collected while translating.

use std::collections::{
    BTreeMap,
    HashSet,
};

/// Ordered, duplicate-free miss log of a single locale.
#[derive(Debug, Clone, Default)]
struct MissLog {
    /// Misses in first-seen order
    order: Vec<String>,
    /// Membership index over `order`
    seen: HashSet<String>,
}

/// Per-locale record of source strings that had no translation.
///
/// Logs only grow; a string is kept once per locale at the position where it
/// was first missed.
#[derive(Debug, Clone, Default)]
pub struct MissTracker {
    /// Keyed by locale, sorted so exports are stable
    logs: BTreeMap<String, MissLog>,
}

impl MissTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a miss. Returns `true` if `source` was not yet in the log.
    pub fn record(&mut self, locale: &str, source: &str) -> bool {
        let log = self.logs.entry(locale.to_string()).or_default();
        if log.seen.contains(source) {
            return false;
        }
        log.seen.insert(source.to_string());
        log.order.push(source.to_string());
        true
    }

    /// Misses of `locale` in first-seen order.
    #[must_use]
    pub fn entries(&self, locale: &str) -> &[String] {
        self.logs.get(locale).map(|log| log.order.as_slice()).unwrap_or_default()
    }

    /// Locales with at least one miss, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.logs.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}
