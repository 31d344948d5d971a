//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    LocaleSettings,
};
use crate::loader::parse_jsonc;

/// 設定ファイル名
pub(super) const CONFIG_FILE_NAME: &str = ".draw-locale.json";

/// ワークスペースから設定を読み込む
///
/// `.draw-locale.json` ファイルを探して読み込む（コメント・末尾カンマ可）
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<LocaleSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let value = parse_jsonc(&content)?;
    let settings: LocaleSettings = serde_json::from_value(value)?;

    Ok(Some(settings))
}
