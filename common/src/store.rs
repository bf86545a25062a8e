//! 報酬状態ストア
//!
//! RewardState の唯一の所有者。スキャン画面・特典画面はどちらもこのストア経由で
//! 読み書きし、ストレージへ直接アクセスしない。
//!
//! - load: 起動時に1回だけ読み込む。欠落・破損時はデフォルト値
//! - 変更操作のたびに状態全体をJSONで上書き保存（後勝ち）

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::notification::Notification;
use crate::stats::DashboardStats;
use crate::types::{ImageHandle, RewardState};
use std::collections::HashMap;

/// キー・バリュー型の永続化先
pub trait StateStorage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストレージ（テスト・プレビュー用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 特典交換の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedeemOutcome {
    Claimed { title: String, remaining: u32 },
    Insufficient { title: String, shortfall: u32 },
}

impl RedeemOutcome {
    pub fn is_claimed(&self) -> bool {
        matches!(self, RedeemOutcome::Claimed { .. })
    }

    pub fn notification(&self) -> Notification {
        match self {
            RedeemOutcome::Claimed { title, .. } => Notification::reward_claimed(title),
            RedeemOutcome::Insufficient { shortfall, .. } => {
                Notification::insufficient_points(*shortfall)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewardStore<S> {
    storage: S,
    key: String,
    points_per_recycle: u32,
    state: RewardState,
    active_image: Option<ImageHandle>,
    load_error: Option<String>,
}

impl<S: StateStorage> RewardStore<S> {
    /// 保存済み状態を読み込む
    ///
    /// 読み込み・パースに失敗してもエラーにはせず、デフォルト状態で開始する。
    /// 失敗内容は `load_error()` で取得してログに出す。
    pub fn load(storage: S, config: &AppConfig) -> Self {
        let (state, load_error) = match restore_state(&storage, &config.storage_key) {
            Ok(state) => (state.unwrap_or_default(), None),
            Err(e) => (RewardState::default(), Some(e.to_string())),
        };

        Self {
            storage,
            key: config.storage_key.clone(),
            points_per_recycle: config.points_per_recycle,
            state,
            active_image: None,
            load_error,
        }
    }

    pub fn state(&self) -> &RewardState {
        &self.state
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_state(&self.state)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 読み込み時に握りつぶしたエラー
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn active_image(&self) -> Option<&ImageHandle> {
        self.active_image.as_ref()
    }

    /// 表示中のスキャンを破棄し、画像ハンドルを返す（解放は呼び出し側）
    pub fn clear_active_image(&mut self) -> Option<ImageHandle> {
        self.active_image.take()
    }

    /// 状態全体をシリアライズして上書き保存
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.state)?;
        self.storage.write(&self.key, &json)
    }

    /// スキャン完了: totalScans +1、結果表示用の画像を設定
    ///
    /// 保存に失敗しても状態の更新は残る。
    pub fn on_scan_complete(&mut self, image: ImageHandle) -> Result<()> {
        self.state.total_scans = self.state.total_scans.saturating_add(1);
        self.active_image = Some(image);
        self.save()
    }

    /// リサイクル完了: totalRecycled +1、ポイント加算
    ///
    /// 連続日数はここでは変更しない。
    pub fn on_item_recycled(&mut self, _item_name: &str) -> Result<()> {
        self.state.total_recycled = self.state.total_recycled.saturating_add(1);
        self.state.points = self.state.points.saturating_add(self.points_per_recycle);
        self.save()
    }

    /// 特典交換
    ///
    /// ポイント不足の場合は状態も保存も変更しない。
    pub fn redeem_reward(&mut self, title: &str, cost: u32) -> Result<RedeemOutcome> {
        if self.state.points < cost {
            return Ok(RedeemOutcome::Insufficient {
                title: title.to_string(),
                shortfall: cost - self.state.points,
            });
        }

        self.state.points -= cost;
        self.save()?;
        Ok(RedeemOutcome::Claimed {
            title: title.to_string(),
            remaining: self.state.points,
        })
    }

    /// 初期状態に戻して保存
    pub fn reset(&mut self) -> Result<()> {
        self.state = RewardState::default();
        self.active_image = None;
        self.save()
    }
}

fn restore_state<S: StateStorage>(storage: &S, key: &str) -> Result<Option<RewardState>> {
    match storage.read(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(Error::PersistenceParse),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    fn store_with(json: &str) -> RewardStore<MemoryStorage> {
        let storage = MemoryStorage::with_entry("recycleVisionStats", json);
        RewardStore::load(storage, &config())
    }

    /// 書き込みが常に失敗するストレージ
    struct ReadOnlyStorage;

    impl StateStorage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_load_absent_uses_default() {
        let store = RewardStore::load(MemoryStorage::new(), &config());
        assert_eq!(*store.state(), RewardState::default());
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_load_corrupted_uses_default() {
        let store = store_with("{not json");
        assert_eq!(*store.state(), RewardState::default());
        let err = store.load_error().expect("パース失敗が記録されていない");
        assert!(err.contains("Persistence parse error"));
    }

    #[test]
    fn test_load_saved_state() {
        let store = store_with(r#"{"totalScans":5,"totalRecycled":4,"points":40,"streak":2}"#);
        assert_eq!(store.state().total_scans, 5);
        assert_eq!(store.state().points, 40);
        assert_eq!(store.state().streak, 2);
    }

    #[test]
    fn test_round_trip() {
        let mut store = RewardStore::load(MemoryStorage::new(), &config());
        store.on_scan_complete(ImageHandle::new("a.jpg")).unwrap();
        store.on_item_recycled("Glass Jar").unwrap();
        let saved = *store.state();

        let reloaded = RewardStore::load(store.storage().clone(), &config());
        assert_eq!(*reloaded.state(), saved);
    }

    #[test]
    fn test_scan_complete_sets_active_image() {
        let mut store = RewardStore::load(MemoryStorage::new(), &config());
        store.on_scan_complete(ImageHandle::new("blob:1")).unwrap();

        assert_eq!(store.state().total_scans, 1);
        assert_eq!(store.active_image().map(|h| h.as_str()), Some("blob:1"));
        assert_eq!(store.clear_active_image(), Some(ImageHandle::new("blob:1")));
        assert!(store.active_image().is_none());
    }

    #[test]
    fn test_item_recycled_awards_points() {
        let mut store = RewardStore::load(MemoryStorage::new(), &config());
        store.on_item_recycled("Aluminum Can").unwrap();

        assert_eq!(store.state().total_recycled, 1);
        assert_eq!(store.state().points, 10);
        assert_eq!(store.state().streak, 1);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut store = RewardStore::load(MemoryStorage::new(), &config());
        store.on_scan_complete(ImageHandle::new("x")).unwrap();

        let raw = store.storage().get("recycleVisionStats").unwrap();
        assert_eq!(raw, r#"{"totalScans":1,"totalRecycled":0,"points":0,"streak":1}"#);
    }

    #[test]
    fn test_redeem_exact_points() {
        let mut store = store_with(r#"{"totalScans":10,"totalRecycled":10,"points":100,"streak":1}"#);
        let outcome = store.redeem_reward("10% Discount", 100).unwrap();

        assert!(outcome.is_claimed());
        assert_eq!(store.state().points, 0);
        assert_eq!(outcome.notification().title, "Reward Claimed!");

        let reloaded = RewardStore::load(store.storage().clone(), &config());
        assert_eq!(reloaded.state().points, 0);
    }

    #[test]
    fn test_redeem_insufficient_points() {
        let mut store = store_with(r#"{"totalScans":10,"totalRecycled":10,"points":100,"streak":1}"#);
        let outcome = store.redeem_reward("Special", 150).unwrap();

        assert_eq!(
            outcome,
            RedeemOutcome::Insufficient {
                title: "Special".into(),
                shortfall: 50
            }
        );
        assert_eq!(store.state().points, 100);
        assert!(outcome.notification().description.contains("50"));
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let mut store = RewardStore::load(ReadOnlyStorage, &config());
        let result = store.on_scan_complete(ImageHandle::new("y"));

        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(store.state().total_scans, 1);
    }

    #[test]
    fn test_reset() {
        let mut store = store_with(r#"{"totalScans":3,"totalRecycled":1,"points":10,"streak":1}"#);
        store.reset().unwrap();

        assert_eq!(*store.state(), RewardState::default());
        let raw = store.storage().get("recycleVisionStats").unwrap();
        assert_eq!(raw, r#"{"totalScans":0,"totalRecycled":0,"points":0,"streak":1}"#);
    }

    #[test]
    fn test_custom_award() {
        let config = AppConfig {
            points_per_recycle: 25,
            ..AppConfig::default()
        };
        let mut store = RewardStore::load(MemoryStorage::new(), &config);
        store.on_item_recycled("Cardboard Box").unwrap();
        assert_eq!(store.state().points, 25);
    }

    #[test]
    fn test_stats_with_saturated_points() {
        let mut store =
            store_with(r#"{"totalScans":1,"totalRecycled":1,"points":4294967290,"streak":1}"#);
        assert_eq!(store.stats().points_to_next_level, 10);

        store.on_item_recycled("Plastic Bottle").unwrap();
        assert_eq!(store.state().points, u32::MAX);
        assert_eq!(store.stats().points_to_next_level, 5);
    }
}
