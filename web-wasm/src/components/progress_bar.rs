//! プログレスバーコンポーネント

use leptos::prelude::*;

/// value は 0〜100（%）
#[component]
pub fn ProgressBar(value: Signal<u32>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-fill"
                style=move || format!("width: {}%", value.get().min(100))
            />
        </div>
    }
}
