//! スキャン〜リサイクル〜特典交換の流れを検証

use rand::rngs::StdRng;
use rand::SeedableRng;
use recycle_vision::rewards;
use recycle_vision::scan::{mark_recycled, scan_file};
use recycle_vision::storage::{open_store, FileStorage};
use recycle_vision_common::{
    AppConfig, ClassificationResult, Classifier, Error, ImageHandle, RedeemOutcome,
    ScanStatus, StateStorage, RECYCLING_DATABASE,
};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::{tempdir, TempDir};

/// 常に同じラベルを返す分類器
struct FixedClassifier(&'static str);

impl Classifier for FixedClassifier {
    async fn classify(
        &self,
        _image: &ImageHandle,
    ) -> recycle_vision_common::Result<ClassificationResult> {
        Ok(ClassificationResult {
            label: self.0.to_string(),
            score: 0.87,
        })
    }
}

/// 常に失敗する分類器
struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    async fn classify(
        &self,
        _image: &ImageHandle,
    ) -> recycle_vision_common::Result<ClassificationResult> {
        Err(Error::Classification("model failed to load".into()))
    }
}

fn image_in(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("item.jpg");
    std::fs::write(&path, b"not really a jpeg").unwrap();
    path
}

/// アップロード → 解析 → リサイクル記録
#[tokio::test]
async fn test_scan_then_recycle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = image_in(&dir);
    let mut store = open_store(dir.path(), &AppConfig::default());
    let mut rng = StdRng::seed_from_u64(7);

    let mut report = scan_file(
        &mut store,
        &FixedClassifier("water bottle"),
        &image,
        Duration::ZERO,
        &mut rng,
    )
    .await
    .unwrap();

    assert_eq!(store.state().total_scans, 1);
    assert_eq!(report.session.status(), ScanStatus::Identified);
    assert_eq!(report.session.detected_label(), Some("water bottle"));
    let record = report.session.record().expect("リサイクル情報がない");
    assert!(RECYCLING_DATABASE.contains(record));

    let titles: Vec<&str> = report.notifications.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Item Scanned!", "Analysis Complete"]);
    assert_eq!(report.notifications[1].description, "Detected: water bottle");

    let notification = mark_recycled(&mut store, &mut report.session).unwrap();
    assert_eq!(notification.map(|n| n.title), Some("Great job!".to_string()));
    assert_eq!(store.state().total_recycled, 1);
    assert_eq!(store.state().points, 10);
    assert!(!report.session.can_mark_recycled());
    assert_eq!(report.session.recycle_button_label(), "Item Recycled!");
}

/// リサイクル記録は1回だけ
#[tokio::test]
async fn test_mark_recycled_only_once() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = image_in(&dir);
    let mut store = open_store(dir.path(), &AppConfig::default());
    let mut rng = StdRng::seed_from_u64(3);

    let classifier = FixedClassifier("tin can");
    let mut report = scan_file(&mut store, &classifier, &image, Duration::ZERO, &mut rng)
        .await
        .unwrap();

    assert!(mark_recycled(&mut store, &mut report.session).unwrap().is_some());
    assert!(mark_recycled(&mut store, &mut report.session).unwrap().is_none());
    assert!(mark_recycled(&mut store, &mut report.session).unwrap().is_none());

    assert_eq!(store.state().total_recycled, 1);
    assert_eq!(store.state().points, 10);
}

/// 分類失敗: スキャン件数は加算、結果なし、リサイクル不可
#[tokio::test]
async fn test_classification_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = image_in(&dir);
    let mut store = open_store(dir.path(), &AppConfig::default());
    let mut rng = StdRng::seed_from_u64(1);

    let mut report = scan_file(&mut store, &BrokenClassifier, &image, Duration::ZERO, &mut rng)
        .await
        .unwrap();

    assert_eq!(store.state().total_scans, 1);
    assert_eq!(report.session.status(), ScanStatus::Failed);
    assert!(report.session.identification().is_none());

    let failed = &report.notifications[1];
    assert!(failed.is_destructive());
    assert_eq!(failed.title, "Analysis Failed");

    assert!(mark_recycled(&mut store, &mut report.session).unwrap().is_none());
    assert_eq!(store.state().total_recycled, 0);
    assert_eq!(store.state().points, 0);
}

/// 処理待ち時間の後に結果が出る
#[tokio::test]
async fn test_processing_delay_is_applied() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = image_in(&dir);
    let mut store = open_store(dir.path(), &AppConfig::default());
    let mut rng = StdRng::seed_from_u64(5);

    let started = std::time::Instant::now();
    scan_file(
        &mut store,
        &FixedClassifier("jar"),
        &image,
        Duration::from_millis(50),
        &mut rng,
    )
    .await
    .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(store.state().total_scans, 1);
}

/// 100ポイントで100ポイントの特典を交換
#[test]
fn test_redeem_exact_points() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::new(dir.path());
    storage.write("recycleVisionStats", r#"{"points":100}"#).unwrap();
    let mut store = open_store(dir.path(), &AppConfig::default());

    let outcome = rewards::redeem(&mut store, "10% Discount").unwrap();
    assert_eq!(
        outcome,
        RedeemOutcome::Claimed {
            title: "10% Discount".into(),
            remaining: 0,
        }
    );
    assert_eq!(outcome.notification().title, "Reward Claimed!");

    let reopened = open_store(dir.path(), &AppConfig::default());
    assert_eq!(reopened.state().points, 0);
}

/// 100ポイントで150ポイントの特典は交換できない
#[test]
fn test_redeem_insufficient_points() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::new(dir.path());
    storage.write("recycleVisionStats", r#"{"points":100}"#).unwrap();
    let mut store = open_store(dir.path(), &AppConfig::default());

    let outcome = store.redeem_reward("Custom Reward", 150).unwrap();
    assert!(!outcome.is_claimed());
    let notification = outcome.notification();
    assert!(notification.is_destructive());
    assert!(notification.description.contains("50"));
    assert_eq!(store.state().points, 100);
}

/// 番号指定で交換（2番 = Plant a Tree、250ポイント）
#[test]
fn test_redeem_by_number() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::new(dir.path());
    storage.write("recycleVisionStats", r#"{"points":300}"#).unwrap();
    let mut store = open_store(dir.path(), &AppConfig::default());

    let outcome = rewards::redeem(&mut store, "2").unwrap();
    assert_eq!(
        outcome,
        RedeemOutcome::Claimed {
            title: "Plant a Tree".into(),
            remaining: 50,
        }
    );
}
