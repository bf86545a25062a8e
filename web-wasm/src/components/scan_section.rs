//! スキャンセクション
//!
//! アップロード / カメラの2タブ。画像取得後、擬似処理時間を待ってから
//! 画像ハンドルを親へ渡す。

use crate::camera;
use crate::notify::use_toaster;
use gloo::console;
use gloo::timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recycle_vision_common::{CameraCommand, CaptureMode, CaptureSource, CaptureState, ImageHandle};
use web_sys::MediaStream;

#[component]
pub fn ScanSection<F>(on_scan_complete: F, processing_delay_ms: u32) -> impl IntoView
where
    F: Fn(ImageHandle) + 'static + Clone + Send + Sync,
{
    let toaster = use_toaster();
    let capture = RwSignal::new(CaptureState::new());
    let stream = StoredValue::new_local(None::<MediaStream>);
    let video_ref = NodeRef::<html::Video>::new();
    let file_input = NodeRef::<html::Input>::new();

    let release_stream = move || {
        if let Some(media) = stream.try_update_value(|s| s.take()).flatten() {
            camera::stop_stream(&media);
        }
        if let Some(video) = video_ref.get_untracked() {
            video.set_src_object(None);
        }
    };

    let stop_camera = move || {
        release_stream();
        capture.update(|c| c.camera_stopped());
    };

    let start_camera = move || {
        // 許可待ちの要求は1つだけ
        if !capture.try_update(|c| c.begin_camera_start()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            match camera::request_camera().await {
                Ok(media) => {
                    // 許可待ちの間にタブが切り替わった場合はすぐ解放する
                    let still_wanted = capture
                        .try_with_untracked(|c| c.mode() == CaptureMode::Camera)
                        .unwrap_or(false);
                    let already_streaming =
                        stream.try_with_value(|s| s.is_some()).unwrap_or(false);
                    if !still_wanted || already_streaming {
                        camera::stop_stream(&media);
                        capture.try_update(|c| c.camera_start_cancelled());
                        return;
                    }
                    if let Some(video) = video_ref.get_untracked() {
                        video.set_src_object(Some(&media));
                    }
                    stream.set_value(Some(media));
                    capture.update(|c| c.camera_granted());
                }
                Err(e) => {
                    console::error!(format!("Error accessing camera: {}", e));
                    if let Some(notification) = capture.try_update(|c| c.camera_failed()) {
                        toaster.push(notification);
                    }
                }
            }
        });
    };

    let run_command = move |command: Option<CameraCommand>| match command {
        Some(CameraCommand::Start) => start_camera(),
        Some(CameraCommand::Stop) => stop_camera(),
        None => {}
    };

    // 処理完了後に親へ渡す。親が結果表示へ切り替えるとこのコンポーネントは破棄される
    let emit = {
        let on_scan_complete = on_scan_complete.clone();
        move |handle: ImageHandle, source: CaptureSource| {
            let notification = capture.try_update(|c| c.finish_processing(source));
            on_scan_complete(handle);
            if let Some(notification) = notification {
                toaster.push(notification);
            }
        }
    };

    let on_file_change = {
        let emit = emit.clone();
        move |_: ev::Event| {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // 同じファイルを再選択しても change が発火するようにする
            input.set_value("");

            if !capture.try_update(|c| c.begin_file_selection()).unwrap_or(false) {
                return;
            }

            let emit = emit.clone();
            spawn_local(async move {
                TimeoutFuture::new(processing_delay_ms).await;
                match camera::object_url(&file) {
                    Ok(handle) => emit(handle, CaptureSource::File),
                    Err(e) => {
                        console::error!("Error reading file:", e);
                        capture.try_update(|c| c.abort_processing());
                    }
                }
            });
        }
    };

    let take_photo = {
        let emit = emit.clone();
        move || {
            let Some(video) = video_ref.get_untracked() else {
                return;
            };
            if !capture.try_update(|c| c.begin_frame_capture()).unwrap_or(false) {
                return;
            }

            let emit = emit.clone();
            spawn_local(async move {
                match camera::snapshot_frame(&video).await {
                    Ok(handle) => {
                        TimeoutFuture::new(processing_delay_ms).await;
                        emit(handle, CaptureSource::Camera);
                    }
                    Err(e) => {
                        console::error!("Error capturing frame:", e);
                        capture.try_update(|c| c.abort_processing());
                    }
                }
            });
        }
    };

    let on_camera_button = move |_: ev::MouseEvent| {
        match capture.with_untracked(|c| c.camera_button_command()) {
            Some(command) => run_command(Some(command)),
            None => take_photo(),
        }
    };

    let select_tab = move |mode: CaptureMode| {
        let command = capture.try_update(|c| c.switch_mode(mode)).flatten();
        run_command(command);
    };

    // 結果表示へ切り替わったときもカメラを解放する
    on_cleanup(move || release_stream());

    let is_mode = move |mode: CaptureMode| capture.with(|c| c.mode() == mode);

    view! {
        <div class="card scan-section">
            <div class="card-content">
                <h2 class="text-center">"Scan Your Item"</h2>

                <div class="tabs">
                    {[CaptureMode::Upload, CaptureMode::Camera]
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <button
                                    class="tab"
                                    class:active=move || is_mode(mode)
                                    on:click=move |_| select_tab(mode)
                                >
                                    {mode.tab_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="tab-content" class:hidden=move || !is_mode(CaptureMode::Upload)>
                    <div class="upload-area">
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                        <p class="text-muted">"Upload a photo of the item you want to recycle"</p>
                        <button
                            class="btn btn-primary"
                            disabled=move || capture.with(|c| c.is_processing())
                            on:click=move |_| {
                                if let Some(input) = file_input.get_untracked() {
                                    input.click();
                                }
                            }
                        >
                            {move || capture.with(|c| c.upload_button_label())}
                        </button>
                    </div>
                </div>

                <div class="tab-content" class:hidden=move || !is_mode(CaptureMode::Camera)>
                    <div class="camera-frame">
                        <video node_ref=video_ref autoplay=true playsinline=true class="camera-preview" />
                        <Show when=move || !capture.with(|c| c.is_camera_active())>
                            <div class="camera-overlay">"Camera inactive"</div>
                        </Show>
                    </div>
                    <button
                        class="btn btn-primary"
                        disabled=move || {
                            capture.with(|c| c.is_processing() || c.is_camera_starting())
                        }
                        on:click=on_camera_button
                    >
                        {move || capture.with(|c| c.camera_button_label())}
                    </button>
                </div>
            </div>
        </div>
    }
}
