//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use serde_json::Value;

use crate::table::LocaleTable;

/// ツールバーが参照する全てのキーパス
pub const SCHEMA_KEYS: [&str; 38] = [
    "draw.toolbar.actions.title",
    "draw.toolbar.actions.text",
    "draw.toolbar.finish.title",
    "draw.toolbar.finish.text",
    "draw.toolbar.undo.title",
    "draw.toolbar.undo.text",
    "draw.toolbar.buttons.polyline",
    "draw.toolbar.buttons.polygon",
    "draw.toolbar.buttons.rectangle",
    "draw.toolbar.buttons.circle",
    "draw.toolbar.buttons.marker",
    "draw.toolbar.buttons.circlemarker",
    "draw.handlers.circle.tooltip.start",
    "draw.handlers.circle.radius",
    "draw.handlers.circlemarker.tooltip.start",
    "draw.handlers.marker.tooltip.start",
    "draw.handlers.polygon.tooltip.start",
    "draw.handlers.polygon.tooltip.cont",
    "draw.handlers.polygon.tooltip.end",
    "draw.handlers.polyline.error",
    "draw.handlers.polyline.tooltip.start",
    "draw.handlers.polyline.tooltip.cont",
    "draw.handlers.polyline.tooltip.end",
    "draw.handlers.rectangle.tooltip.start",
    "draw.handlers.simpleshape.tooltip.end",
    "edit.toolbar.actions.save.title",
    "edit.toolbar.actions.save.text",
    "edit.toolbar.actions.cancel.title",
    "edit.toolbar.actions.cancel.text",
    "edit.toolbar.actions.clearAll.title",
    "edit.toolbar.actions.clearAll.text",
    "edit.toolbar.buttons.edit",
    "edit.toolbar.buttons.editDisabled",
    "edit.toolbar.buttons.remove",
    "edit.toolbar.buttons.removeDisabled",
    "edit.handlers.edit.tooltip.text",
    "edit.handlers.edit.tooltip.subtext",
    "edit.handlers.remove.tooltip.text",
];

/// テスト用の `LocaleTable` を作成する
///
/// # Panics
/// 不正なテーブルの場合
#[allow(clippy::expect_used)]
pub fn create_table(value: &Value) -> LocaleTable {
    LocaleTable::from_value(value).expect("test table must be valid")
}
