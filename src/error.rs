use thiserror::Error;

use crate::key_path::KeyPath;

/// Errors raised while building, querying or merging locale tables
#[derive(Error, Debug)]
pub enum LocaleError {
    /// A lookup path does not resolve to a string leaf
    #[error("Locale key '{path}' not found")]
    MissingKey {
        /// Path that was looked up
        path: KeyPath,
    },

    /// An override does not have the shape of the table it is merged into
    #[error("Invalid override at '{path}': expected {expected}, found {found}")]
    InvalidOverrideShape {
        /// Path of the offending override entry
        path: KeyPath,
        /// What the base table holds at this path
        expected: &'static str,
        /// What the override supplied
        found: &'static str,
    },

    /// A table source contains something other than non-empty strings and objects
    #[error("Invalid locale entry at '{path}': {found} is not allowed, expected a non-empty string or an object")]
    InvalidEntry {
        /// Path of the offending entry
        path: KeyPath,
        /// Kind of value found
        found: &'static str,
    },

    /// The table does not match the documented toolbar schema
    #[error("Locale table does not match the toolbar schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// No built-in table exists for this locale code
    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    /// A built-in asset failed to load
    #[error("Built-in locale '{locale}' is corrupt: {message}")]
    Builtin {
        /// Locale code of the asset
        locale: &'static str,
        /// Underlying failure
        message: String,
    },
}

impl LocaleError {
    /// Shorthand for [`LocaleError::MissingKey`].
    #[must_use]
    pub fn missing_key(path: impl Into<KeyPath>) -> Self {
        Self::MissingKey { path: path.into() }
    }

    /// Returns `true` if this is a failed lookup.
    #[must_use]
    pub const fn is_missing_key(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }

    /// Returns `true` if this is a rejected override.
    #[must_use]
    pub const fn is_invalid_override_shape(&self) -> bool {
        matches!(self, Self::InvalidOverrideShape { .. })
    }
}

/// Describe a JSON value kind for error messages.
pub(crate) const fn describe_value(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(s) if s.is_empty() => "an empty string",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
