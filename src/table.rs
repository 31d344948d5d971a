//! Immutable locale table.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use serde_json::{
    Map,
    Value,
};

use crate::error::{
    LocaleError,
    describe_value,
};
use crate::key_path::KeyPath;
use crate::merge::merge_group;

/// One node of a locale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A translated string shown by the toolbar.
    Text(String),
    /// A named group of entries, ordered by key.
    Group(BTreeMap<String, Self>),
}

impl Entry {
    /// Build an entry from JSON, rejecting anything but non-empty strings and
    /// non-empty objects.
    ///
    /// `path` is the location of `value` and is only used for error reporting.
    pub fn from_value(path: &KeyPath, value: &Value) -> Result<Self, LocaleError> {
        match value {
            Value::String(text) if !text.is_empty() => Ok(Self::Text(text.clone())),
            Value::Object(map) if map.is_empty() => {
                Err(LocaleError::InvalidEntry { path: path.clone(), found: "an empty object" })
            }
            Value::Object(map) => group_from_map(path, map).map(Self::Group),
            other => {
                Err(LocaleError::InvalidEntry { path: path.clone(), found: describe_value(other) })
            }
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::Group(group) => {
                Value::Object(group.iter().map(|(key, entry)| (key.clone(), entry.to_value())).collect())
            }
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Group(_) => None,
        }
    }

    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Group(group) => serialize_group(group, serializer),
        }
    }
}

/// Convert every member of `map`, stopping at the first invalid one.
fn group_from_map(
    path: &KeyPath,
    map: &Map<String, Value>,
) -> Result<BTreeMap<String, Entry>, LocaleError> {
    let mut group = BTreeMap::new();
    for (key, child) in map {
        group.insert(key.clone(), Entry::from_value(&path.child(key), child)?);
    }
    Ok(group)
}

/// Serialize a group as a JSON object.
fn serialize_group<S: Serializer>(
    group: &BTreeMap<String, Entry>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(group.len()))?;
    for (key, entry) in group {
        map.serialize_entry(key, entry)?;
    }
    map.end()
}

/// Nested mapping of UI label keys to translated strings.
///
/// Tables are values: they are never mutated after construction, and
/// [`LocaleTable::with_overrides`] returns a new table.
///
/// # Examples
/// ```
/// use leaflet_draw_locale::LocaleTable;
/// use serde_json::json;
///
/// let table = LocaleTable::from_value(&json!({
///     "draw": { "toolbar": { "buttons": { "polygon": "Draw a polygon" } } }
/// }))?;
///
/// assert_eq!(table.get(&["draw", "toolbar", "buttons", "polygon"])?, "Draw a polygon");
///
/// let custom = table.with_overrides(&json!({
///     "draw": { "toolbar": { "buttons": { "polygon": "Draw an awesome polygon" } } }
/// }))?;
/// assert_eq!(custom.lookup("draw.toolbar.buttons.polygon", ".")?, "Draw an awesome polygon");
/// assert_eq!(table.lookup("draw.toolbar.buttons.polygon", ".")?, "Draw a polygon");
/// # Ok::<(), leaflet_draw_locale::LocaleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleTable {
    /// Top-level groups (`draw`, `edit`).
    root: BTreeMap<String, Entry>,
}

impl LocaleTable {
    /// Build a table from a JSON object.
    ///
    /// An empty root object gives an empty table, but nested groups must
    /// hold at least one entry.
    ///
    /// # Errors
    /// Returns [`LocaleError::InvalidEntry`] if the value is not an object,
    /// a nested object is empty, or any leaf is not a non-empty string.
    pub fn from_value(value: &Value) -> Result<Self, LocaleError> {
        let path = KeyPath::default();
        let Value::Object(map) = value else {
            return Err(LocaleError::InvalidEntry { path, found: describe_value(value) });
        };
        Ok(Self { root: group_from_map(&path, map)? })
    }

    /// Parse a table from JSON text.
    ///
    /// # Errors
    /// Returns [`LocaleError::Schema`] on malformed JSON, otherwise as [`LocaleTable::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self, LocaleError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.iter().map(|(key, entry)| (key.clone(), entry.to_value())).collect())
    }

    /// Returns the string at `path`.
    ///
    /// # Errors
    /// Returns [`LocaleError::MissingKey`] if a segment is absent or the path
    /// ends on a group instead of a string.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<&str, LocaleError> {
        self.entry(path)
            .and_then(Entry::as_text)
            .ok_or_else(|| LocaleError::missing_key(path))
    }

    /// Same as [`LocaleTable::get`] for an already parsed [`KeyPath`].
    pub fn get_path(&self, path: &KeyPath) -> Result<&str, LocaleError> {
        self.get(path.segments())
    }

    /// Look up a separated key such as `draw.toolbar.buttons.polygon`.
    pub fn lookup(&self, key: &str, separator: &str) -> Result<&str, LocaleError> {
        self.get_path(&KeyPath::parse(key, separator))
    }

    /// Returns the entry (string or group) at `path`, if any.
    #[must_use]
    pub fn entry<S: AsRef<str>>(&self, path: &[S]) -> Option<&Entry> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(first.as_ref())?;
        for segment in rest {
            match current {
                Entry::Group(group) => current = group.get(segment.as_ref())?,
                Entry::Text(_) => return None,
            }
        }
        Some(current)
    }

    /// Checks if `path` resolves to a string.
    #[must_use]
    pub fn contains<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.entry(path).is_some_and(|entry| !entry.is_group())
    }

    /// Returns a new table with the leaves of `partial` replacing those of `self`.
    ///
    /// Objects merge key by key, strings replace outright. Keys unknown to
    /// the base table are added.
    ///
    /// # Errors
    /// Returns [`LocaleError::InvalidOverrideShape`] if `partial` is not an
    /// object, supplies an object where the base holds a string or vice
    /// versa, or supplies a leaf that is not a non-empty string.
    pub fn with_overrides(&self, partial: &Value) -> Result<Self, LocaleError> {
        let Value::Object(partial) = partial else {
            return Err(LocaleError::InvalidOverrideShape {
                path: KeyPath::default(),
                expected: "an object",
                found: describe_value(partial),
            });
        };

        let mut root = self.root.clone();
        merge_group(&mut root, partial, &KeyPath::default())?;
        Ok(Self { root })
    }

    /// Returns a new table with the single leaf at `path` replaced by `value`.
    pub fn with_override(
        &self,
        path: impl Into<KeyPath>,
        value: impl Into<String>,
    ) -> Result<Self, LocaleError> {
        let path = path.into();
        let partial = path
            .segments()
            .iter()
            .rev()
            .fold(Value::String(value.into()), |inner, segment| {
                let mut map = serde_json::Map::new();
                map.insert(segment.clone(), inner);
                Value::Object(map)
            });
        self.with_overrides(&partial)
    }

    /// Flatten into separated key paths, e.g. `draw.toolbar.undo.text`.
    #[must_use]
    pub fn flatten(&self, separator: &str) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        flatten_group(&self.root, separator, None, &mut result);
        result
    }

    /// All leaf paths, in key order.
    #[must_use]
    pub fn key_paths(&self) -> Vec<KeyPath> {
        let mut result = Vec::new();
        collect_paths(&self.root, &KeyPath::default(), &mut result);
        result
    }

    /// Number of string leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        count_leaves(&self.root)
    }

    /// Groups are never empty, so a table without groups has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Top-level groups.
    #[must_use]
    pub const fn root(&self) -> &BTreeMap<String, Entry> {
        &self.root
    }
}

/// Recursive worker for [`LocaleTable::flatten`].
fn flatten_group(
    group: &BTreeMap<String, Entry>,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, String>,
) {
    for (key, entry) in group {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match entry {
            Entry::Text(text) => {
                result.insert(full_key, text.clone());
            }
            Entry::Group(child) => flatten_group(child, separator, Some(&full_key), result),
        }
    }
}

/// Recursive worker for [`LocaleTable::len`].
fn count_leaves(group: &BTreeMap<String, Entry>) -> usize {
    group
        .values()
        .map(|entry| match entry {
            Entry::Text(_) => 1,
            Entry::Group(child) => count_leaves(child),
        })
        .sum()
}

/// Recursive worker for [`LocaleTable::key_paths`].
fn collect_paths(group: &BTreeMap<String, Entry>, prefix: &KeyPath, result: &mut Vec<KeyPath>) {
    for (key, entry) in group {
        let path = prefix.child(key);
        match entry {
            Entry::Text(_) => result.push(path),
            Entry::Group(child) => collect_paths(child, &path, result),
        }
    }
}

impl Serialize for LocaleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_group(&self.root, serializer)
    }
}

impl<'de> Deserialize<'de> for LocaleTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(D::Error::custom)
    }
}

impl TryFrom<&Value> for LocaleTable {
    type Error = LocaleError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
