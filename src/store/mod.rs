//! In-memory translation tables
/// Source string to translation mapping per locale
mod locale_store;
/// Untranslated (fuzzy) text tracking per locale
mod miss_tracker;

pub use locale_store::LocaleStore;
pub use miss_tracker::MissTracker;
