//! localStorage バックエンド

use crate::js_util::js_error_message;
use gloo::storage::{LocalStorage, Storage};
use recycle_vision_common::{Error, StateStorage};

/// ブラウザの localStorage に状態を保存する
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl StateStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), Error> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }
}
