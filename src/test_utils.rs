//! Helpers shared by test modules.
#![cfg(test)]

use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};

/// Write `<dir>/<locale>.json` containing `pairs` as a flat JSON object
///
/// # Returns
/// Path of the written file
#[allow(clippy::unwrap_used)]
pub(crate) fn write_locale_file(dir: &Path, locale: &str, pairs: &[(&str, &str)]) -> PathBuf {
    let map: Map<String, Value> = pairs
        .iter()
        .map(|(source, translation)| ((*source).to_string(), Value::String((*translation).to_string())))
        .collect();
    let path = dir.join(format!("{locale}.json"));
    std::fs::write(&path, Value::Object(map).to_string()).unwrap();
    path
}
