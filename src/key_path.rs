//! Key path parsing and matching utilities.

use std::fmt;

/// Separator used when a key path is displayed.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A sequence of nested-object keys identifying one entry of a locale table.
///
/// Empty segments are kept as-is so that a malformed path such as
/// `draw..toolbar` resolves to a missing key rather than a different leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyPath {
    /// Path segments from the root down.
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a separated key such as `draw.toolbar.buttons.polygon`.
    ///
    /// # Examples
    /// ```
    /// use leaflet_draw_locale::KeyPath;
    ///
    /// let path = KeyPath::parse("edit/toolbar/buttons/edit", "/");
    /// assert_eq!(path.segments(), ["edit", "toolbar", "buttons", "edit"]);
    /// assert_eq!(path.to_string(), "edit.toolbar.buttons.edit");
    /// ```
    #[must_use]
    pub fn parse(text: &str, separator: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        if separator.is_empty() {
            return Self { segments: vec![text.to_string()] };
        }
        Self { segments: text.split(separator).map(str::to_string).collect() }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Checks if this path lies strictly below `parent`.
    #[must_use]
    pub fn is_child_of(&self, parent: &Self) -> bool {
        self.segments.len() > parent.segments.len() && self.segments.starts_with(&parent.segments)
    }

    /// Join the segments with `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_SEPARATOR))
    }
}

impl<S: AsRef<str>> From<&[S]> for KeyPath {
    fn from(segments: &[S]) -> Self {
        Self { segments: segments.iter().map(|s| s.as_ref().to_string()).collect() }
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for KeyPath {
    fn from(segments: [S; N]) -> Self {
        Self { segments: segments.iter().map(|s| s.as_ref().to_string()).collect() }
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &Self) -> Self {
        path.clone()
    }
}
