//! データモデル
//!
//! CLIとWeb(WASM)で共有される型:
//! - RewardState: 永続化されるスキャン・リサイクル・ポイント・連続日数
//! - ClassificationResult: 分類器の出力（表示専用、永続化しない）
//! - ImageHandle: 1回のスキャンで使う画像への参照

use serde::{Deserialize, Serialize};

/// ユーザーの累計記録
///
/// ストレージには camelCase の JSON 1オブジェクトとして丸ごと上書き保存される。
/// 欠けたフィールドは個別にデフォルト値で補う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardState {
    pub total_scans: u32,
    pub total_recycled: u32,
    pub points: u32,
    pub streak: u32,
}

impl Default for RewardState {
    fn default() -> Self {
        Self {
            total_scans: 0,
            total_recycled: 0,
            points: 0,
            streak: 1,
        }
    }
}

/// 分類器のトップ1予測
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    #[serde(default)]
    pub score: f64,
}

impl ClassificationResult {
    /// スコアをパーセント表記に丸める
    pub fn confidence_percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// 画像への一時参照
///
/// Webでは `URL.createObjectURL` のURL、CLIではファイルパス。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(String);

impl ImageHandle {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
