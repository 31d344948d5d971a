//! Structural merge of override mappings into a locale table

use std::collections::BTreeMap;

use serde_json::{
    Map,
    Value,
};

use crate::error::{
    LocaleError,
    describe_value,
};
use crate::key_path::KeyPath;
use crate::table::Entry;

/// Merge `partial` into `group` in place.
///
/// `group` is a private copy owned by the caller, so a failed merge leaves
/// the source table untouched.
pub fn merge_group(
    group: &mut BTreeMap<String, Entry>,
    partial: &Map<String, Value>,
    path: &KeyPath,
) -> Result<(), LocaleError> {
    for (key, value) in partial {
        let child_path = path.child(key);

        match (group.get_mut(key), value) {
            (Some(Entry::Group(child)), Value::Object(child_partial)) => {
                merge_group(child, child_partial, &child_path)?;
            }
            (Some(Entry::Group(_)), other) => {
                return Err(LocaleError::InvalidOverrideShape {
                    path: child_path,
                    expected: "an object",
                    found: describe_value(other),
                });
            }
            (Some(Entry::Text(text)), Value::String(replacement)) if !replacement.is_empty() => {
                replacement.clone_into(text);
            }
            (Some(Entry::Text(_)), other) => {
                return Err(LocaleError::InvalidOverrideShape {
                    path: child_path,
                    expected: "a non-empty string",
                    found: describe_value(other),
                });
            }
            (None, other) => {
                tracing::debug!("Adding locale key '{}' absent from the base table", child_path);
                let entry = Entry::from_value(&child_path, other).map_err(|e| match e {
                    LocaleError::InvalidEntry { path, found } => LocaleError::InvalidOverrideShape {
                        path,
                        expected: "a non-empty string or an object",
                        found,
                    },
                    other => other,
                })?;
                group.insert(key.clone(), entry);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::needless_pass_by_value)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::table::LocaleTable;
    use crate::test_utils::create_table;

    /// Five strings under `draw`.
    fn base() -> LocaleTable {
        create_table(&json!({
            "draw": {
                "toolbar": {
                    "buttons": { "polygon": "Draw a polygon", "circle": "Draw a circle" },
                    "finish": { "title": "Finish drawing", "text": "Finish" }
                },
                "handlers": { "circle": { "radius": "Radius" } }
            }
        }))
    }

    #[googletest::test]
    fn test_empty_override_is_identity() {
        let table = base();
        let merged = table.with_overrides(&json!({})).unwrap();
        expect_that!(merged, eq(&table));
    }

    #[googletest::test]
    fn test_nested_override_replaces_only_the_leaf() {
        let table = base();
        let merged = table
            .with_overrides(&json!({
                "draw": { "toolbar": { "buttons": { "polygon": "Draw an awesome polygon" } } }
            }))
            .unwrap();

        expect_that!(
            merged.lookup("draw.toolbar.buttons.polygon", ".").ok(),
            some(eq("Draw an awesome polygon"))
        );
        expect_that!(merged.lookup("draw.toolbar.buttons.circle", ".").ok(), some(eq("Draw a circle")));
        expect_that!(merged.lookup("draw.toolbar.finish.text", ".").ok(), some(eq("Finish")));
        expect_that!(table.lookup("draw.toolbar.buttons.polygon", ".").ok(), some(eq("Draw a polygon")));
    }

    #[googletest::test]
    fn test_unknown_keys_are_added() {
        let merged = base()
            .with_overrides(&json!({ "draw": { "toolbar": { "undo": { "text": "Undo" } } } }))
            .unwrap();

        expect_that!(merged.lookup("draw.toolbar.undo.text", ".").ok(), some(eq("Undo")));
        expect_that!(merged.len(), eq(6));
    }

    #[googletest::test]
    fn test_empty_object_over_existing_group_is_identity() {
        let table = base();
        let merged = table.with_overrides(&json!({ "draw": { "toolbar": {} } })).unwrap();
        expect_that!(merged, eq(&table));
    }

    #[googletest::test]
    fn test_disjoint_overrides_compose() {
        let table = base();
        let first = json!({ "draw": { "toolbar": { "buttons": { "polygon": "Polygon" } } } });
        let second = json!({ "draw": { "handlers": { "circle": { "radius": "R" } } } });
        let union = json!({
            "draw": {
                "toolbar": { "buttons": { "polygon": "Polygon" } },
                "handlers": { "circle": { "radius": "R" } }
            }
        });

        let stepwise = table.with_overrides(&first).unwrap().with_overrides(&second).unwrap();
        let combined = table.with_overrides(&union).unwrap();

        expect_that!(stepwise, eq(&combined));
    }

    #[rstest]
    #[case::object_over_string(
        json!({ "draw": { "toolbar": { "buttons": { "polygon": { "text": "x" } } } } }),
        "draw.toolbar.buttons.polygon",
        "a non-empty string",
        "an object"
    )]
    #[case::string_over_object(
        json!({ "draw": { "toolbar": "Toolbar" } }),
        "draw.toolbar",
        "an object",
        "a string"
    )]
    #[case::number_over_string(
        json!({ "draw": { "handlers": { "circle": { "radius": 5 } } } }),
        "draw.handlers.circle.radius",
        "a non-empty string",
        "a number"
    )]
    #[case::empty_string(
        json!({ "draw": { "toolbar": { "finish": { "text": "" } } } }),
        "draw.toolbar.finish.text",
        "a non-empty string",
        "an empty string"
    )]
    #[case::array_for_new_key(
        json!({ "edit": ["Save"] }),
        "edit",
        "a non-empty string or an object",
        "an array"
    )]
    #[case::empty_object_for_new_key(
        json!({ "draw": { "bogus": {} } }),
        "draw.bogus",
        "a non-empty string or an object",
        "an empty object"
    )]
    #[case::nested_empty_object_for_new_key(
        json!({ "edit": { "toolbar": {} } }),
        "edit.toolbar",
        "a non-empty string or an object",
        "an empty object"
    )]
    #[case::root_not_object(json!("Draw"), "", "an object", "a string")]
    fn test_shape_mismatch_is_rejected(
        #[case] partial: Value,
        #[case] expected_path: &str,
        #[case] expected_kind: &str,
        #[case] found_kind: &str,
    ) {
        let table = base();
        match table.with_overrides(&partial) {
            Err(LocaleError::InvalidOverrideShape { path, expected, found }) => {
                assert_eq!(path.to_string(), expected_path);
                assert_eq!(expected, expected_kind);
                assert_eq!(found, found_kind);
            }
            other => panic!("expected InvalidOverrideShape, got {other:?}"),
        }
        assert_eq!(table, base());
    }
}
