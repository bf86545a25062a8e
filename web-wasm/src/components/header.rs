//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_rewards: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <span class="brand-icon">"♻"</span>
                    <h1>"RecycleVision Rewards"</h1>
                </div>
                <nav>
                    <button class="btn btn-ghost" on:click=move |_| on_rewards(())>
                        "🏆 Rewards"
                    </button>
                </nav>
            </div>
        </header>
    }
}
