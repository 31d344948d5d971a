//! ペルシャ語ツールバー文字列の公開 API テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use leaflet_draw_locale::{
    DRAW_VERSION,
    KeyPath,
    LocaleError,
    LocaleTable,
    check_conformance,
    english,
    persian,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[test]
fn test_every_leaf_is_a_non_empty_string() {
    let table = persian().unwrap();

    for path in english().unwrap().key_paths() {
        let text = table.get_path(&path).unwrap();
        assert!(!text.is_empty(), "'{path}' is empty");
    }
}

#[rstest]
#[case("draw.toolbar.buttons.polygon", "ترسیم چند ضلعی")]
#[case("draw.toolbar.undo.text", "خذف آخرین نقطه")]
#[case("draw.handlers.polyline.error", "<strong>خطاء:</strong> لبه های شکل نمی توانند متقاطع شوند!")]
#[case("edit.toolbar.actions.clearAll.text", "پاک سازی همه")]
#[case("edit.toolbar.buttons.removeDisabled", "لایه ای برای حذف نیست")]
#[case(
    "edit.handlers.edit.tooltip.text",
    "برای ویرایش ویژگی‌ها، دستگیره‌ها یا نشانگرها را بکشید."
)]
fn test_persian_strings(#[case] key: &str, #[case] expected: &str) {
    assert_eq!(persian().unwrap().lookup(key, ".").unwrap(), expected);
}

#[rstest]
#[case("draw.toolbar.buttons.hexagon")]
#[case("draw.toolbar.buttons")]
#[case("format.numeric.delimiters.thousands")]
#[case("edit.handlers.remove.tooltip.text.extra")]
#[case("")]
fn test_invalid_paths_are_missing(#[case] key: &str) {
    let result = persian().unwrap().lookup(key, ".");
    assert!(matches!(result, Err(LocaleError::MissingKey { .. })));
}

#[test]
fn test_empty_override_is_identity() {
    let table = persian().unwrap();
    assert_eq!(&table.with_overrides(&json!({})).unwrap(), table);
}

#[test]
fn test_awesome_polygon_override() {
    let base = persian().unwrap();
    let custom = base
        .with_overrides(&json!({
            "draw": { "toolbar": { "buttons": { "polygon": "Draw an awesome polygon" } } }
        }))
        .unwrap();

    assert_eq!(custom.get(&["draw", "toolbar", "buttons", "polygon"]).unwrap(), "Draw an awesome polygon");
    assert_eq!(custom.get(&["draw", "toolbar", "buttons", "circle"]).unwrap(), "ترسیم دایره");
    assert_eq!(base.get(&["draw", "toolbar", "buttons", "polygon"]).unwrap(), "ترسیم چند ضلعی");
    assert!(check_conformance(english().unwrap(), &custom).is_conformant());
}

#[test]
fn test_override_changes_only_the_target_path() {
    let base = persian().unwrap();
    let target = KeyPath::from(["edit", "handlers", "remove", "tooltip", "text"]);
    let custom = base.with_override(&target, "Click to remove").unwrap();

    assert_eq!(custom.get_path(&target).unwrap(), "Click to remove");
    for path in base.key_paths().into_iter().filter(|path| path != &target) {
        assert_eq!(custom.get_path(&path).unwrap(), base.get_path(&path).unwrap());
    }
}

#[test]
fn test_disjoint_overrides_equal_their_union() {
    let base = persian().unwrap();
    let draw = json!({ "draw": { "handlers": { "circle": { "radius": "Radius" } } } });
    let edit = json!({ "edit": { "toolbar": { "buttons": { "edit": "Edit layers" } } } });
    let union = json!({
        "draw": { "handlers": { "circle": { "radius": "Radius" } } },
        "edit": { "toolbar": { "buttons": { "edit": "Edit layers" } } }
    });

    let stepwise = base.with_overrides(&draw).unwrap().with_overrides(&edit).unwrap();
    let reversed = base.with_overrides(&edit).unwrap().with_overrides(&draw).unwrap();

    assert_eq!(stepwise, base.with_overrides(&union).unwrap());
    assert_eq!(stepwise, reversed);
}

#[test]
fn test_shape_mismatch_leaves_base_untouched() {
    let base = persian().unwrap();
    let before: LocaleTable = base.clone();

    let result = base.with_overrides(&json!({ "edit": { "handlers": { "remove": "حذف" } } }));

    assert!(matches!(result, Err(LocaleError::InvalidOverrideShape { .. })));
    assert_eq!(base, &before);
}

#[test]
fn test_typed_view() {
    let typed = persian().unwrap().to_typed().unwrap();

    assert_eq!(typed.draw.handlers.simpleshape.tooltip.end, "برای اتمام موس را رها کنید.");
    assert_eq!(typed.edit.toolbar.buttons.edit_disabled, "لایه ای برای ویرایش نیست");
}

#[test]
fn test_draw_version() {
    assert_eq!(DRAW_VERSION, "0.4.2");
}
