//! Typed view of the toolbar string schema and cross-locale conformance checks.

use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::LocaleError;
use crate::key_path::KeyPath;
use crate::table::LocaleTable;

/// A `{ title, text }` pair used by toolbar action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ActionLabel {
    pub title: String,
    pub text: String,
}

/// Tooltip holding only a start prompt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StartTooltip {
    pub start: String,
}

/// Tooltip for multi-click shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressTooltip {
    pub start: String,
    pub cont: String,
    pub end: String,
}

/// Tooltip holding only an end prompt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EndTooltip {
    pub end: String,
}

/// Handler with only a start tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StartHandler {
    pub tooltip: StartTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CircleHandler {
    pub tooltip: StartTooltip,
    pub radius: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PolygonHandler {
    pub tooltip: ProgressTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PolylineHandler {
    /// Banner shown when a drawn shape intersects itself. May contain markup.
    pub error: String,
    pub tooltip: ProgressTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimpleShapeHandler {
    pub tooltip: EndTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DrawButtons {
    pub polyline: String,
    pub polygon: String,
    pub rectangle: String,
    pub circle: String,
    pub marker: String,
    pub circlemarker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DrawToolbar {
    pub actions: ActionLabel,
    pub finish: ActionLabel,
    pub undo: ActionLabel,
    pub buttons: DrawButtons,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DrawHandlers {
    pub circle: CircleHandler,
    pub circlemarker: StartHandler,
    pub marker: StartHandler,
    pub polygon: PolygonHandler,
    pub polyline: PolylineHandler,
    pub rectangle: StartHandler,
    pub simpleshape: SimpleShapeHandler,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DrawStrings {
    pub toolbar: DrawToolbar,
    pub handlers: DrawHandlers,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EditActions {
    pub save: ActionLabel,
    pub cancel: ActionLabel,
    pub clear_all: ActionLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EditButtons {
    pub edit: String,
    pub edit_disabled: String,
    pub remove: String,
    pub remove_disabled: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditToolbar {
    pub actions: EditActions,
    pub buttons: EditButtons,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditTooltip {
    pub text: String,
    pub subtext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveTooltip {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditHandler {
    pub tooltip: EditTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveHandler {
    pub tooltip: RemoveTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditHandlers {
    pub edit: EditHandler,
    pub remove: RemoveHandler,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditStrings {
    pub toolbar: EditToolbar,
    pub handlers: EditHandlers,
}

/// Every string the draw and edit toolbars display.
///
/// Rendering code that wants compile-time checked keys can hold this instead
/// of a [`LocaleTable`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DrawLocal {
    pub draw: DrawStrings,
    pub edit: EditStrings,
}

impl LocaleTable {
    /// Convert to the typed schema.
    ///
    /// # Errors
    /// Returns [`LocaleError::Schema`] if a schema key is missing or the
    /// table holds keys the schema does not know.
    pub fn to_typed(&self) -> Result<DrawLocal, LocaleError> {
        Ok(serde_json::from_value(self.to_value())?)
    }
}

impl TryFrom<&DrawLocal> for LocaleTable {
    type Error = LocaleError;

    fn try_from(typed: &DrawLocal) -> Result<Self, Self::Error> {
        Self::from_value(&serde_json::to_value(typed)?)
    }
}

/// Key-path differences between a reference table and a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conformance {
    /// Paths the reference has and the candidate lacks.
    pub missing: Vec<KeyPath>,
    /// Paths the candidate has and the reference lacks.
    pub extra: Vec<KeyPath>,
}

impl Conformance {
    #[must_use]
    pub const fn is_conformant(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compare the leaf key paths of `candidate` against `reference`.
///
/// Translations must populate exactly the key paths the toolbar reads, so
/// any difference is reported.
#[must_use]
pub fn check_conformance(reference: &LocaleTable, candidate: &LocaleTable) -> Conformance {
    let expected: BTreeSet<KeyPath> = reference.key_paths().into_iter().collect();
    let actual: BTreeSet<KeyPath> = candidate.key_paths().into_iter().collect();

    let conformance = Conformance {
        missing: expected.difference(&actual).cloned().collect(),
        extra: actual.difference(&expected).cloned().collect(),
    };

    if !conformance.is_conformant() {
        tracing::debug!(
            "Locale table differs from reference: {} missing, {} extra",
            conformance.missing.len(),
            conformance.extra.len()
        );
    }

    conformance
}
