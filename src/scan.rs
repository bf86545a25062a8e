//! スキャン処理
//!
//! 処理待ち → スキャン件数加算 → 分類 → 結果表示 → リサイクル記録 の順に進める。
//! Web版と同じく、分類結果とは無関係にリサイクル情報をランダムに1件選ぶ。

use crate::error::{RecycleVisionError, Result};
use rand::Rng;
use recycle_vision_common::{
    identify, CaptureSource, CaptureState, Classifier, ImageHandle, Notification, RewardStore,
    ScanSession, StateStorage,
};
use std::path::Path;
use std::time::Duration;

/// 1回のスキャン結果
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub session: ScanSession,
    /// 表示順の通知（スキャン受付 → 解析結果）
    pub notifications: Vec<Notification>,
}

/// 画像ファイルをスキャンする
///
/// スキャン件数は分類の成否に関わらず加算される。
/// 分類の失敗はエラーにせず、失敗通知を含むレポートとして返す。
pub async fn scan_file<S, C, R>(
    store: &mut RewardStore<S>,
    classifier: &C,
    path: &Path,
    delay: Duration,
    rng: &mut R,
) -> Result<ScanReport>
where
    S: StateStorage,
    C: Classifier,
    R: Rng + ?Sized,
{
    if !path.is_file() {
        return Err(RecycleVisionError::FileNotFound(path.display().to_string()));
    }

    let mut capture = CaptureState::new();
    capture.begin_file_selection();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let scanned = capture.finish_processing(CaptureSource::File);

    let image = ImageHandle::new(path.display().to_string());
    store.on_scan_complete(image.clone())?;

    let mut session = ScanSession::new(image);
    let outcome = identify(classifier, session.image(), rng).await;
    let analyzed = session.finish(outcome);

    Ok(ScanReport {
        session,
        notifications: vec![scanned, analyzed],
    })
}

/// リサイクル済みとして記録する
///
/// 記録済み・未解析のセッションでは何もせず None を返す。
pub fn mark_recycled<S: StateStorage>(
    store: &mut RewardStore<S>,
    session: &mut ScanSession,
) -> Result<Option<Notification>> {
    match session.mark_recycled() {
        Some(item) => {
            store.on_item_recycled(item)?;
            Ok(Some(Notification::item_recycled()))
        }
        None => Ok(None),
    }
}
