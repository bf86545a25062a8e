//! カメラ・画像ハンドル操作（web-sys）

use crate::js_util::js_error_message;
use futures::channel::oneshot;
use recycle_vision_common::{Error, ImageHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, Url,
};

fn permission_error(err: JsValue) -> Error {
    Error::Permission(js_error_message(&err))
}

/// getUserMedia({ video: true })
pub async fn request_camera() -> Result<MediaStream, Error> {
    let window = web_sys::window().ok_or_else(|| Error::Permission("no window".into()))?;
    let devices = window.navigator().media_devices().map_err(permission_error)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(permission_error)?;
    let stream = JsFuture::from(promise).await.map_err(permission_error)?;
    stream.dyn_into::<MediaStream>().map_err(permission_error)
}

/// すべてのトラックを停止する
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// 現在のビデオフレームを静止画にしてオブジェクトURLを返す
pub async fn snapshot_frame(video: &HtmlVideoElement) -> Result<ImageHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    context.draw_image_with_html_video_element_and_dw_and_dh(
        video,
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    )?;

    let (tx, rx) = oneshot::channel::<Option<Blob>>();
    let callback = Closure::once_into_js(move |blob: Option<Blob>| {
        let _ = tx.send(blob);
    });
    canvas.to_blob(callback.unchecked_ref())?;

    let blob = rx
        .await
        .map_err(|_| JsValue::from_str("toBlob callback dropped"))?
        .ok_or_else(|| JsValue::from_str("empty frame"))?;
    object_url(&blob)
}

/// Blob（File を含む）からオブジェクトURLを作る
pub fn object_url(blob: &Blob) -> Result<ImageHandle, JsValue> {
    Url::create_object_url_with_blob(blob).map(ImageHandle::new)
}

pub fn revoke_object_url(handle: &ImageHandle) {
    let _ = Url::revoke_object_url(handle.as_str());
}
