//! ブラウザ上での localStorage バックエンドのテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行する。

use recycle_vision_common::{AppConfig, ImageHandle, RewardState, RewardStore, StateStorage};
use recycle_vision_web::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn config(key: &str) -> AppConfig {
    AppConfig {
        storage_key: key.to_string(),
        ..AppConfig::default()
    }
}

#[wasm_bindgen_test]
fn test_browser_storage_write_then_read() {
    let mut storage = BrowserStorage;
    storage.write("rv-test-raw", "hello").unwrap();
    assert_eq!(storage.read("rv-test-raw").unwrap().as_deref(), Some("hello"));
}

#[wasm_bindgen_test]
fn test_missing_key_reads_none() {
    let storage = BrowserStorage;
    assert_eq!(storage.read("rv-test-never-written").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_store_round_trip_through_local_storage() {
    let config = config("rv-test-round-trip");
    let mut store = RewardStore::load(BrowserStorage, &config);
    store.reset().unwrap();
    store.on_scan_complete(ImageHandle::new("blob:test")).unwrap();
    store.on_item_recycled("Glass Jar").unwrap();

    let reloaded = RewardStore::load(BrowserStorage, &config);
    assert_eq!(
        *reloaded.state(),
        RewardState {
            total_scans: 1,
            total_recycled: 1,
            points: 10,
            streak: 1,
        }
    );
}

#[wasm_bindgen_test]
fn test_corrupted_local_storage_falls_back_to_default() {
    let mut storage = BrowserStorage;
    storage.write("rv-test-corrupt", "{\"totalScans\":").unwrap();

    let store = RewardStore::load(BrowserStorage, &config("rv-test-corrupt"));
    assert_eq!(*store.state(), RewardState::default());
    assert!(store.load_error().is_some());
}
