//! アプリケーション設定
//!
//! ストレージキー・処理待ち時間・付与ポイント・分類モデル

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 永続化キー
pub const DEFAULT_STORAGE_KEY: &str = "recycleVisionStats";

/// 画像選択・撮影後の擬似処理時間
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 1500;

/// リサイクル1件あたりの付与ポイント
pub const DEFAULT_POINTS_PER_RECYCLE: u32 = 10;

pub const DEFAULT_MODEL: &str = "onnx-community/mobilenetv4_conv_small.e2400_r224_in1k";
pub const DEFAULT_DEVICE: &str = "webgpu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub storage_key: String,
    pub processing_delay_ms: u64,
    pub points_per_recycle: u32,
    pub model: String,
    pub device: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            points_per_recycle: DEFAULT_POINTS_PER_RECYCLE,
            model: DEFAULT_MODEL.into(),
            device: DEFAULT_DEVICE.into(),
        }
    }
}

impl AppConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// 待ち時間なし（テスト用）
    pub fn without_delay(mut self) -> Self {
        self.processing_delay_ms = 0;
        self
    }
}
