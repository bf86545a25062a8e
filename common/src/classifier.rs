//! 画像分類器の抽象
//!
//! 分類器は明示的に生成して利用側へ渡すサービスとして扱う。
//! 初回呼び出しでモデルを読み込み、以降は再利用し、不要になったら dispose する。

use crate::error::{Error, Result};
use crate::types::{ClassificationResult, ImageHandle};
use serde::Deserialize;

#[allow(async_fn_in_trait)]
pub trait Classifier {
    /// 画像を分類してトップ1予測を返す
    ///
    /// 初回はモデル読み込みを含むため長時間かかりうる。タイムアウトはない。
    async fn classify(&self, image: &ImageHandle) -> Result<ClassificationResult>;

    /// 推論パイプラインを解放する
    fn dispose(&self) {}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifierOutput {
    Single(ClassificationResult),
    Ranked(Vec<ClassificationResult>),
}

/// 分類器の出力JSONからトップ1予測を取り出す
///
/// `{label, score}` 単体、またはスコア降順の配列（先頭を採用）を受け付ける。
///
/// # Examples
/// ```
/// use recycle_vision_common::parse_classifier_output;
///
/// let top = parse_classifier_output(r#"[{"label":"beer bottle","score":0.6}]"#).unwrap();
/// assert_eq!(top.label, "beer bottle");
/// ```
pub fn parse_classifier_output(output: &str) -> Result<ClassificationResult> {
    let parsed: ClassifierOutput = serde_json::from_str(output.trim())
        .map_err(|e| Error::Classification(format!("invalid classifier output: {}", e)))?;

    match parsed {
        ClassifierOutput::Single(result) => Ok(result),
        ClassifierOutput::Ranked(results) => results
            .into_iter()
            .next()
            .ok_or_else(|| Error::Classification("classifier returned no predictions".into())),
    }
}
