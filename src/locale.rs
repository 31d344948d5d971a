//! Built-in locale tables

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::LocaleError;
use crate::table::LocaleTable;

/// Upstream English strings, also the reference shape for other locales.
const EN_JSON: &str = include_str!("locales/en.json");
/// Persian strings.
const FA_JSON: &str = include_str!("locales/fa.json");

/// Parsed English table.
static EN: LazyLock<Result<LocaleTable, String>> = LazyLock::new(|| parse_builtin("en", EN_JSON));
/// Parsed Persian table.
static FA: LazyLock<Result<LocaleTable, String>> = LazyLock::new(|| parse_builtin("fa", FA_JSON));

/// Parse an embedded asset, keeping the error as text so it can live in a static.
fn parse_builtin(code: &str, json: &str) -> Result<LocaleTable, String> {
    tracing::debug!("Parsing built-in locale '{}'", code);
    LocaleTable::from_json_str(json).map_err(|e| e.to_string())
}

/// Normalize language code (lowercase and replace - with _)
fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

/// Locales shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    English,
    Persian,
}

impl Locale {
    /// All built-in locales.
    pub const ALL: [Self; 2] = [Self::English, Self::Persian];

    /// Primary language subtag.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Persian => "fa",
        }
    }

    /// Whether the UI should be laid out right to left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Persian)
    }

    /// Returns the built-in table for this locale.
    ///
    /// # Errors
    /// Returns [`LocaleError::Builtin`] if the embedded asset is invalid.
    pub fn table(self) -> Result<&'static LocaleTable, LocaleError> {
        let parsed = match self {
            Self::English => &*EN,
            Self::Persian => &*FA,
        };
        parsed
            .as_ref()
            .map_err(|message| LocaleError::Builtin { locale: self.code(), message: message.clone() })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts a language code with an optional region, e.g. `fa`, `fa-IR`, `en_us`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_language_code(code.trim());
        let language = normalized.split('_').next().unwrap_or_default();
        match language {
            "en" => Ok(Self::English),
            "fa" => Ok(Self::Persian),
            _ => Err(LocaleError::UnknownLocale(code.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}

/// Returns the built-in table for `locale`.
pub fn builtin(locale: Locale) -> Result<&'static LocaleTable, LocaleError> {
    locale.table()
}

/// The Persian table.
pub fn persian() -> Result<&'static LocaleTable, LocaleError> {
    Locale::Persian.table()
}

/// The English table.
pub fn english() -> Result<&'static LocaleTable, LocaleError> {
    Locale::English.table()
}
