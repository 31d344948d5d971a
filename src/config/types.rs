use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use thiserror::Error;

use crate::error::LocaleError;
use crate::key_path::KeyPath;
use crate::loader::LoadError;
use crate::locale::Locale;
use crate::schema::Conformance;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., `overrideFiles[0]`)
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to load override file: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("Effective locale table does not match the toolbar keys:\n{}", format_conformance(.0))]
    NonConformant(Conformance),
}

/// Render validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render missing and unknown key paths, one per line.
fn format_conformance(conformance: &Conformance) -> String {
    let missing = conformance.missing.iter().map(|path| format!("  missing: {path}"));
    let extra = conformance.extra.iter().map(|path| format!("  unknown: {path}"));
    missing.chain(extra).collect::<Vec<_>>().join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Built-in locale code, e.g. `fa` or `fa-IR`.
    pub locale: String,

    pub key_separator: String,

    /// Partial mapping applied after all override files.
    pub overrides: Value,

    /// Override files, relative to the workspace root, applied in order.
    pub override_files: Vec<PathBuf>,

    /// Reject effective tables whose keys differ from the toolbar's.
    pub strict: bool,
}

impl LocaleSettings {
    /// # Errors
    /// - Invalid separator
    /// - Unknown locale
    /// - Overrides that are not an object
    /// - Empty override file path
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.locale.parse::<Locale>().is_err() {
            let supported =
                Locale::ALL.into_iter().map(Locale::code).collect::<Vec<_>>().join(", ");
            errors.push(ValidationError::new(
                "locale",
                format!("Unknown locale '{}'. Supported locales: {supported}", self.locale),
            ));
        }

        if !self.overrides.is_object() {
            errors.push(ValidationError::new(
                "overrides",
                "Overrides must be an object shaped like the locale table, e.g. {\"draw\": {...}}",
            ));
        }

        for (index, path) in self.override_files.iter().enumerate() {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::new(
                    format!("overrideFiles[{index}]"),
                    "The path cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Parse a key written with the configured separator.
    #[must_use]
    pub fn key_path(&self, key: &str) -> KeyPath {
        KeyPath::parse(key, &self.key_separator)
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            locale: Locale::Persian.code().to_string(),
            key_separator: ".".to_string(),
            overrides: Value::Object(serde_json::Map::new()),
            override_files: Vec::new(),
            strict: true,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::expect_used,
    clippy::panic,
    clippy::needless_pass_by_value
)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = LocaleSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: LocaleSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings.locale, eq("fa"));
        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.override_files, is_empty());
        assert_that!(settings.strict, eq(true));
        assert_that!(settings.overrides.is_object(), eq(true));
        assert_that!(settings, eq(&LocaleSettings::default()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{
            "locale": "en-US",
            "overrideFiles": ["locales/custom.json"],
            "overrides": { "draw": { "toolbar": { "buttons": { "polygon": "Polygon" } } } }
        }"#;

        let settings: LocaleSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.locale, eq("en-US"));
        assert_that!(settings.override_files, len(eq(1)));
        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    #[case::empty_separator(
        LocaleSettings { key_separator: String::new(), ..LocaleSettings::default() },
        "keySeparator"
    )]
    #[case::unknown_locale(
        LocaleSettings { locale: "xx".to_string(), ..LocaleSettings::default() },
        "locale"
    )]
    #[case::overrides_not_object(
        LocaleSettings { overrides: Value::String("Draw".to_string()), ..LocaleSettings::default() },
        "overrides"
    )]
    #[case::empty_override_file(
        LocaleSettings { override_files: vec![PathBuf::new()], ..LocaleSettings::default() },
        "overrideFiles[0]"
    )]
    fn validate_reports_field(#[case] settings: LocaleSettings, #[case] field: &str) {
        let errors = settings.validate().unwrap_err();

        assert_that!(errors, len(eq(1)));
        assert_that!(errors[0].field_path, eq(field));
    }

    #[rstest]
    fn validation_errors_are_numbered() {
        let settings = LocaleSettings {
            key_separator: String::new(),
            locale: "xx".to_string(),
            ..LocaleSettings::default()
        };

        let error_message =
            ConfigError::ValidationErrors(settings.validate().unwrap_err()).to_string();

        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. keySeparator"));
        assert_that!(error_message, contains_substring("2. locale"));
        assert_that!(error_message, contains_substring("Supported locales: en, fa"));
    }

    #[rstest]
    fn non_conformant_lists_paths() {
        let conformance = Conformance {
            missing: vec![KeyPath::from(["draw", "toolbar", "undo", "text"])],
            extra: vec![KeyPath::from(["draw", "bogus"])],
        };

        let error_message = ConfigError::NonConformant(conformance).to_string();

        assert_that!(error_message, contains_substring("missing: draw.toolbar.undo.text"));
        assert_that!(error_message, contains_substring("unknown: draw.bogus"));
    }

    #[rstest]
    fn key_path_uses_separator() {
        let settings = LocaleSettings { key_separator: "/".to_string(), ..LocaleSettings::default() };

        assert_that!(settings.key_path("draw/toolbar/undo/text").to_string(), eq("draw.toolbar.undo.text"));
    }
}
