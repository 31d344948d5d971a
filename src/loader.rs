//! Locale and override file loading

use std::collections::HashSet;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::LazyLock;

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

use crate::error::{
    LocaleError,
    describe_value,
};
use crate::table::LocaleTable;

/// Primary language subtags recognised in file paths.
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "af", "ar", "az", "be", "bg", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "eo", "es",
        "et", "eu", "fa", "fi", "fo", "fr", "gl", "gu", "he", "hi", "hr", "hu", "hy", "id", "is",
        "it", "ja", "ka", "kk", "kn", "ko", "ky", "lt", "lv", "mk", "mn", "mr", "ms", "mt", "nb",
        "nl", "nn", "pa", "pl", "ps", "pt", "ro", "ru", "sk", "sl", "sq", "sr", "sv", "sw", "ta",
        "te", "th", "tl", "tr", "uk", "ur", "uz", "vi", "zh",
    ]
    .into_iter()
    .collect()
});

/// Errors raised while reading locale files from disk
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when failing to read the file
    #[error("Failed to read locale file: {0}")]
    Io(#[from] std::io::Error),
    /// Error when the file is not valid JSON (comments and trailing commas are allowed)
    #[error("Failed to parse locale file: {0}")]
    Jsonc(#[from] jsonc_parser::errors::ParseError),
    /// Error when the file contains no value
    #[error("Locale file is empty")]
    EmptyDocument,
    /// Error when the top-level value is not an object
    #[error("Locale file must contain an object, found {0}")]
    NotAnObject(&'static str),
    /// Error when the content is not a valid locale table
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// A locale table read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedLocale {
    /// Language detected from the file path, or `"unknown"`.
    pub language: String,
    pub path: PathBuf,
    pub table: LocaleTable,
}

/// Checks if a path component is a language tag such as `fa`, `fa-IR` or `en_US`.
fn is_language_tag(part: &str) -> bool {
    let mut subtags = part.split(['-', '_']);
    let primary = subtags.next().unwrap_or_default().to_lowercase();
    if !LANGUAGE_CODES.contains(primary.as_str()) {
        return false;
    }
    subtags.all(is_region_or_script)
}

/// Region (`IR`, `419`) or script (`Cyrl`) subtag, in any letter case.
fn is_region_or_script(subtag: &str) -> bool {
    match subtag.len() {
        2 | 4 => subtag.chars().all(|c| c.is_ascii_alphabetic()),
        3 => subtag.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Detect language from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that is a language tag.
///
/// # Examples
/// - `locales/fa.json` → `fa`
/// - `leaflet.draw/fa-IR.json` → `fa-IR`
/// - `i18n/en_US/draw.json` → `en_US`
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> String {
    let path_str = file_path.to_string_lossy();
    path_str
        .split(['/', '\\', '.'])
        .rev()
        .find(|part| is_language_tag(part))
        .map_or_else(|| "unknown".to_string(), ToString::to_string)
}

/// Parse JSON text that may contain comments and trailing commas.
///
/// # Errors
/// Returns [`LoadError::Jsonc`] on syntax errors and [`LoadError::EmptyDocument`]
/// if the text holds no value.
pub fn parse_jsonc(text: &str) -> Result<Value, LoadError> {
    jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())?
        .ok_or(LoadError::EmptyDocument)
}

/// Read and parse a file, requiring an object at the top level.
fn read_object(file_path: &Path) -> Result<Value, LoadError> {
    tracing::debug!("Reading locale file: {:?}", file_path);
    let content = std::fs::read_to_string(file_path)?;
    let value = parse_jsonc(&content)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(LoadError::NotAnObject(describe_value(&value)))
    }
}

/// Load a complete locale table from disk.
///
/// # Errors
/// Returns error if the file cannot be read, parsed, or validated.
pub fn load_locale_file(file_path: &Path) -> Result<LoadedLocale, LoadError> {
    let value = read_object(file_path)?;
    let table = LocaleTable::from_value(&value)?;
    let language = detect_language_from_path(file_path);

    tracing::debug!("Loaded locale '{}' with {} strings from {:?}", language, table.len(), file_path);

    Ok(LoadedLocale { language, path: file_path.to_path_buf(), table })
}

/// Load a partial override mapping from disk.
///
/// The mapping is not validated here; [`LocaleTable::with_overrides`] checks
/// its shape against the table it is applied to.
///
/// # Errors
/// Returns error if the file cannot be read or parsed, or is not an object.
pub fn load_override_file(file_path: &Path) -> Result<Value, LoadError> {
    read_object(file_path)
}
