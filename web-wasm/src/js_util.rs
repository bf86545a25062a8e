//! JsValue エラーの文字列化

use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

/// DOMException は "名前: メッセージ"、それ以外は文字列表現を返す
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(dom_exception) = err.dyn_ref::<DomException>() {
        return format!("{}: {}", dom_exception.name(), dom_exception.message());
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
