//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    LocaleSettings,
    loader,
};
use crate::loader::load_override_file;
use crate::locale::{
    Locale,
    english,
};
use crate::schema::check_conformance;
use crate::table::LocaleTable;

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: LocaleSettings,

    /// ワークスペースのルートパス
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: LocaleSettings::default(), workspace_root: None }
    }

    /// 設定を読み込む
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(LocaleSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            LocaleSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する
    pub fn update_settings(&mut self, new_settings: LocaleSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &LocaleSettings {
        &self.current_settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// 設定から有効なロケールテーブルを組み立てる
    ///
    /// 組み込みテーブル → `overrideFiles`（順番通り）→ `overrides` の順に上書きする。
    /// `strict` の場合、キー構成が英語テーブルと一致しなければエラー。
    ///
    /// # Errors
    /// - 不明なロケール
    /// - 上書きファイルの読み込みエラー
    /// - 上書きの形がテーブルと一致しない
    /// - キー構成の不一致（`strict` 時）
    pub fn effective_table(&self) -> Result<LocaleTable, ConfigError> {
        let settings = &self.current_settings;
        let locale: Locale = settings.locale.parse()?;
        let mut table = locale.table()?.clone();

        for file in &settings.override_files {
            let path = self.resolve_path(file);
            tracing::debug!("Applying override file: {:?}", path);
            let partial = load_override_file(&path)?;
            table = table.with_overrides(&partial)?;
        }

        table = table.with_overrides(&settings.overrides)?;

        if settings.strict {
            let conformance = check_conformance(english()?, &table);
            if !conformance.is_conformant() {
                return Err(ConfigError::NonConformant(conformance));
            }
        }

        Ok(table)
    }

    /// ワークスペースルートからの相対パスを解決する
    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.workspace_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}
