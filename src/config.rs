use crate::error::{RecycleVisionError, Result};
use recycle_vision_common::config::DEFAULT_PROCESSING_DELAY_MS;
use recycle_vision_common::AppConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 分類コマンド（画像パスを最後の引数として渡す）
    pub classifier_command: Option<String>,
    pub classifier_args: Vec<String>,
    pub processing_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier_command: None,
            classifier_args: Vec::new(),
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// ~/.config/recycle-vision
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecycleVisionError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recycle-vision"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 保存データの置き場所（`--data-dir` 指定を優先）
    pub fn data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
        match override_dir {
            Some(dir) => Ok(dir),
            None => Self::config_dir(),
        }
    }

    pub fn set_classifier(&mut self, command: String, args: Vec<String>) {
        self.classifier_command = Some(command);
        self.classifier_args = args;
    }

    /// 共通ライブラリ側の設定へ変換
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            processing_delay_ms: self.processing_delay_ms,
            ..AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.processing_delay_ms, 1500);
        assert!(config.classifier_command.is_none());
    }

    #[test]
    fn test_save_creates_parent_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_classifier("python3".into(), vec!["classify.py".into()]);
        config.processing_delay_ms = 0;
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"classifierCommand\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"classifierCommand":"classify"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.classifier_command.as_deref(), Some("classify"));
        assert!(config.classifier_args.is_empty());
        assert_eq!(config.processing_delay_ms, 1500);
    }

    #[test]
    fn test_app_config_carries_delay() {
        let config = Config {
            processing_delay_ms: 250,
            ..Config::default()
        };
        let app = config.app_config();
        assert_eq!(app.processing_delay_ms, 250);
        assert_eq!(app.storage_key, "recycleVisionStats");
        assert_eq!(app.points_per_recycle, 10);
    }

    #[test]
    fn test_data_dir_override() {
        let dir = Config::data_dir(Some(PathBuf::from("/tmp/rv"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/rv"));
    }
}
