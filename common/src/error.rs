//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// カメラ・分類・永続化のエラーはいずれもUI側で通知テキストへ変換され、
/// 呼び出し元へ例外として伝播することはない。
#[derive(Error, Debug)]
pub enum Error {
    /// カメラの権限拒否・デバイス不在
    #[error("Permission error: {0}")]
    Permission(String),

    /// モデル読み込み・推論の失敗
    #[error("Classification error: {0}")]
    Classification(String),

    /// 保存済み状態のJSONが壊れている
    #[error("Persistence parse error: {0}")]
    PersistenceParse(#[source] serde_json::Error),

    /// ストレージバックエンドの読み書き失敗
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
