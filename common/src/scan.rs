//! 解析セッション
//!
//! 1回のスキャン結果の表示状態を管理する。
//!
//! 注意: 表示するリサイクル情報は分類ラベルとは無関係にモックDBからランダムに選ぶ。
//! ラベルは「検出された物体」として表示するだけで、情報の選択や検証には使わない。
//! ラベルに基づく照合は未対応。

use crate::catalog::{pick_random_record, RecyclingRecord};
use crate::classifier::Classifier;
use crate::error::Result;
use crate::notification::Notification;
use crate::types::{ClassificationResult, ImageHandle};
use rand::Rng;

/// 分類結果と表示するリサイクル情報
#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    pub detected: ClassificationResult,
    pub record: &'static RecyclingRecord,
}

/// 画像を分類し、リサイクル情報を1件選ぶ
pub async fn identify<C, R>(
    classifier: &C,
    image: &ImageHandle,
    rng: &mut R,
) -> Result<Identification>
where
    C: Classifier,
    R: Rng + ?Sized,
{
    let detected = classifier.classify(image).await?;
    let record = pick_random_record(rng);
    Ok(Identification { detected, record })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Analyzing,
    Identified,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanSession {
    image: ImageHandle,
    status: ScanStatus,
    identification: Option<Identification>,
    recycled: bool,
}

impl ScanSession {
    pub fn new(image: ImageHandle) -> Self {
        Self {
            image,
            status: ScanStatus::Analyzing,
            identification: None,
            recycled: false,
        }
    }

    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ScanStatus::Analyzing
    }

    pub fn identification(&self) -> Option<&Identification> {
        self.identification.as_ref()
    }

    pub fn record(&self) -> Option<&'static RecyclingRecord> {
        self.identification.as_ref().map(|i| i.record)
    }

    pub fn detected_label(&self) -> Option<&str> {
        self.identification.as_ref().map(|i| i.detected.label.as_str())
    }

    /// 解析結果を反映し、表示する通知を返す
    ///
    /// 失敗時は結果を未設定のままにする。
    pub fn finish(&mut self, outcome: Result<Identification>) -> Notification {
        match outcome {
            Ok(identification) => {
                let notification = Notification::analysis_complete(&identification.detected.label);
                self.identification = Some(identification);
                self.status = ScanStatus::Identified;
                notification
            }
            Err(e) => {
                self.status = ScanStatus::Failed;
                Notification::from_error(&e).unwrap_or_else(Notification::analysis_failed)
            }
        }
    }

    pub fn is_recycled(&self) -> bool {
        self.recycled
    }

    pub fn can_mark_recycled(&self) -> bool {
        self.identification.is_some() && !self.recycled
    }

    /// リサイクル済みにする
    ///
    /// 初回のみ品目名を返す。2回目以降は何もしない。
    pub fn mark_recycled(&mut self) -> Option<&'static str> {
        if !self.can_mark_recycled() {
            return None;
        }
        self.recycled = true;
        self.record().map(|r| r.name)
    }

    pub fn recycle_button_label(&self) -> &'static str {
        if self.recycled {
            "Item Recycled!"
        } else {
            "Mark as Recycled"
        }
    }
}
