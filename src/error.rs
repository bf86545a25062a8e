use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecycleVisionError {
    #[error(transparent)]
    Common(#[from] recycle_vision_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("分類コマンドが設定されていません。`recycle-vision config --set-classifier COMMAND` で設定してください")]
    MissingClassifier,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("特典が見つかりません: {0}（番号またはタイトルを指定してください）")]
    RewardNotFound(String),

    #[error("コマンド実行エラー: {0}")]
    CommandExecution(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecycleVisionError>;
