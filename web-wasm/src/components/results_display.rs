//! 解析結果コンポーネント
//!
//! マウント時に1回だけ分類を実行し、モックDBから選んだリサイクル情報を表示する。

use crate::classifier::TransformersClassifier;
use crate::notify::use_toaster;
use gloo::console;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recycle_vision_common::{identify, ImageHandle, Notification, ScanSession};

#[component]
pub fn ResultsDisplay<F>(
    image: ImageHandle,
    classifier: StoredValue<TransformersClassifier, LocalStorage>,
    on_recycled: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let toaster = use_toaster();
    let session = RwSignal::new(ScanSession::new(image.clone()));

    // 解析開始
    {
        let image = image.clone();
        spawn_local(async move {
            let Some(classifier) = classifier.try_get_value() else {
                return;
            };
            let mut rng = rand::thread_rng();
            let outcome = identify(&classifier, &image, &mut rng).await;
            if let Err(e) = &outcome {
                console::error!(format!("Error classifying image: {}", e));
            }
            if let Some(notification) = session.try_update(|s| s.finish(outcome)) {
                toaster.push(notification);
            }
        });
    }

    let on_recycle = move |_: ev::MouseEvent| {
        let recycled = session.try_update(|s| s.mark_recycled()).flatten();
        if let Some(name) = recycled {
            on_recycled(name.to_string());
            toaster.push(Notification::item_recycled());
        }
    };

    let image_url = image.as_str().to_string();

    view! {
        <div class="results">
            <div class="card">
                <div class="card-header results-header">
                    <h3>"Recycling Results"</h3>
                    {move || session.with(|s| s.record()).map(|record| {
                        let class = if record.recyclable {
                            "badge badge-recyclable"
                        } else {
                            "badge badge-non-recyclable"
                        };
                        view! { <span class=class>{record.badge()}</span> }
                    })}
                </div>
                <div class="card-content">
                    <Show
                        when=move || !session.with(|s| s.is_loading())
                        fallback=|| view! {
                            <div class="analyzing">
                                <div class="spinner"></div>
                                <p class="text-muted">"Analyzing your item..."</p>
                            </div>
                        }
                    >
                        <div class="results-grid">
                            <div class="results-image">
                                <img src=image_url.clone() alt="Scanned item" />
                            </div>
                            {move || match session.with(|s| s.identification().cloned()) {
                                Some(identification) => {
                                    let record = identification.record;
                                    view! {
                                        <div class="results-info">
                                            <p class="text-muted text-small">
                                                {format!(
                                                    "Detected: {} ({}%)",
                                                    identification.detected.label,
                                                    identification.detected.confidence_percent(),
                                                )}
                                            </p>
                                            <h3 class="item-name">{record.name}</h3>
                                            <p class="text-muted">{format!("Material: {}", record.material)}</p>
                                            <p>{record.instructions}</p>
                                            <div class="disposal">
                                                <p class="stat-value">"Disposal Method:"</p>
                                                <p>{record.disposal}</p>
                                            </div>
                                        </div>
                                    }
                                    .into_any()
                                }
                                None => view! {
                                    <div class="results-info">
                                        <p class="text-muted">"We couldn't identify this item."</p>
                                    </div>
                                }
                                .into_any(),
                            }}
                        </div>

                        <button
                            class="btn btn-primary btn-block"
                            disabled=move || !session.with(|s| s.can_mark_recycled())
                            on:click=on_recycle.clone()
                        >
                            {move || session.with(|s| if s.is_recycled() { "✔ " } else { "♻ " })}
                            {move || session.with(|s| s.recycle_button_label())}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
