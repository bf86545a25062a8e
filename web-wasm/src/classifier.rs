//! transformers.js による画像分類
//!
//! App 起動時に1つ生成し、結果表示コンポーネントへ渡す。
//! パイプラインは初回の classify で読み込み、以降は使い回す。

use crate::js_util::js_error_message;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use gloo::console;
use recycle_vision_common::{ClassificationResult, Classifier, Error, ImageHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/classifier.js")]
extern "C" {
    #[wasm_bindgen(js_name = "createPipeline", catch)]
    async fn create_pipeline_js(model: &str, device: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "runPipeline", catch)]
    async fn run_pipeline_js(pipeline: &JsValue, image_url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "disposePipeline", catch)]
    async fn dispose_pipeline_js(pipeline: &JsValue) -> Result<JsValue, JsValue>;
}

type LoadFuture<T> = LocalBoxFuture<'static, Result<T, String>>;

/// 1回だけ実行する非同期読み込み
///
/// 読み込み中に再度呼ばれた場合は同じ読み込みの完了を待つ。失敗した場合は保持せず、
/// 次の呼び出しで読み込み直す。
pub(crate) struct SharedLoad<T: Clone> {
    slot: Rc<RefCell<Option<Shared<LoadFuture<T>>>>>,
}

impl<T: Clone> Clone for SharedLoad<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Clone + 'static> SharedLoad<T> {
    pub(crate) fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub(crate) async fn get_or_load<F>(&self, start: F) -> Result<T, String>
    where
        F: FnOnce() -> LoadFuture<T>,
    {
        let load = self
            .slot
            .borrow_mut()
            .get_or_insert_with(|| start().shared())
            .clone();

        let result = load.await;
        if result.is_err() {
            self.slot.borrow_mut().take();
        }
        result
    }

    /// 保持している読み込みを取り出す（読み込み中のものを含む）
    pub(crate) fn take(&self) -> Option<Shared<LoadFuture<T>>> {
        self.slot.borrow_mut().take()
    }
}

#[derive(Clone)]
pub struct TransformersClassifier {
    model: String,
    device: String,
    pipeline: SharedLoad<JsValue>,
}

impl TransformersClassifier {
    pub fn new(model: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            device: device.into(),
            pipeline: SharedLoad::new(),
        }
    }

    async fn pipeline(&self) -> Result<JsValue, Error> {
        let model = self.model.clone();
        let device = self.device.clone();
        self.pipeline
            .get_or_load(move || {
                async move {
                    console::log!(format!("Loading classifier: {} ({})", model, device));
                    create_pipeline_js(&model, &device)
                        .await
                        .map_err(|e| js_error_message(&e))
                }
                .boxed_local()
            })
            .await
            .map_err(Error::Classification)
    }
}

impl Classifier for TransformersClassifier {
    async fn classify(&self, image: &ImageHandle) -> Result<ClassificationResult, Error> {
        let pipeline = self.pipeline().await?;
        let prediction = run_pipeline_js(&pipeline, image.as_str())
            .await
            .map_err(|e| Error::Classification(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(prediction)
            .map_err(|e| Error::Classification(format!("unexpected prediction: {}", e)))
    }

    fn dispose(&self) {
        let Some(load) = self.pipeline.take() else {
            return;
        };
        // 読み込み中なら完了を待ってから解放する
        wasm_bindgen_futures::spawn_local(async move {
            let Ok(pipeline) = load.await else {
                return;
            };
            if let Err(e) = dispose_pipeline_js(&pipeline).await {
                console::error!(format!("Failed to dispose classifier: {}", js_error_message(&e)));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join3;
    use std::cell::Cell;

    fn counting_load(calls: Rc<Cell<u32>>, rx: oneshot::Receiver<u32>) -> LoadFuture<u32> {
        calls.set(calls.get() + 1);
        async move { rx.await.map_err(|_| "load cancelled".to_string()) }.boxed_local()
    }

    #[test]
    fn test_overlapping_loads_share_one_start() {
        let load = SharedLoad::<u32>::new();
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel();
        let (_unused_tx, unused_rx) = oneshot::channel();

        let (first, second, _) = block_on(join3(
            load.get_or_load({
                let calls = Rc::clone(&calls);
                move || counting_load(calls, rx)
            }),
            load.get_or_load({
                let calls = Rc::clone(&calls);
                move || counting_load(calls, unused_rx)
            }),
            async move {
                let _ = tx.send(7);
            },
        ));

        assert_eq!(first, Ok(7));
        assert_eq!(second, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_loaded_value_is_reused() {
        let load = SharedLoad::<u32>::new();
        let calls = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let calls = Rc::clone(&calls);
            let value = block_on(load.get_or_load(move || {
                calls.set(calls.get() + 1);
                async { Ok(3) }.boxed_local()
            }));
            assert_eq!(value, Ok(3));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let load = SharedLoad::<u32>::new();

        let failed = block_on(
            load.get_or_load(|| async { Err("webgpu unavailable".to_string()) }.boxed_local()),
        );
        assert_eq!(failed, Err("webgpu unavailable".to_string()));

        let retried = block_on(load.get_or_load(|| async { Ok(1) }.boxed_local()));
        assert_eq!(retried, Ok(1));
    }

    #[test]
    fn test_take_hands_over_pending_load() {
        let load = SharedLoad::<u32>::new();
        assert!(load.take().is_none());

        block_on(load.get_or_load(|| async { Ok(5) }.boxed_local())).unwrap();
        let taken = load.take().expect("読み込み済みの値がない");
        assert_eq!(block_on(taken), Ok(5));
        assert!(load.take().is_none());
    }
}
