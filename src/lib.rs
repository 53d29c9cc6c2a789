//! fuzzy-translator
//!
//! Runtime string translation backed by `<locale>.json` files. Text without a
//! translation is returned as-is and collected into `<locale>.fuzzy` files for
//! translators to fill in.

pub mod codec;
pub mod config;
pub mod store;
mod test_utils;
pub mod translator;

pub use codec::{
    FlushReport,
    LocaleFileError,
};
pub use translator::{
    BASE_LOCALE,
    LoadReport,
    Translator,
};
