//! Locale file decoding and fuzzy file encoding
/// Codec error types
mod error;
/// `<locale>.fuzzy` export of untranslated text
pub mod fuzzy_file;
/// `<locale>.json` translation files
pub mod locale_file;

pub use error::{
    FlushFailure,
    LocaleFileError,
};
pub use fuzzy_file::{
    FUZZY_FILE_SUFFIX,
    FlushReport,
};
pub use locale_file::{
    LOCALE_FILE_SUFFIX,
    LocaleFile,
};
