//! メインアプリケーションコンポーネント

use crate::camera;
use crate::classifier::TransformersClassifier;
use crate::components::{
    header::Header, progress_dashboard::ProgressDashboard, results_display::ResultsDisplay,
    rewards_page::RewardsPage, scan_section::ScanSection, toaster::Toaster,
};
use crate::notify::ToastQueue;
use crate::storage::BrowserStorage;
use gloo::console;
use leptos::prelude::*;
use recycle_vision_common::{AppConfig, Classifier, ImageHandle, Result, RewardStore};

/// 表示中の画面
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Scan,
    Rewards,
}

fn load_store(config: &AppConfig) -> RewardStore<BrowserStorage> {
    let store = RewardStore::load(BrowserStorage, config);
    if let Some(err) = store.load_error() {
        console::error!(format!("Failed to parse stored stats: {}", err));
    }
    store
}

fn log_save_error(result: Result<()>) {
    if let Err(e) = result {
        console::error!(format!("Failed to save stats: {}", e));
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let processing_delay_ms = u32::try_from(config.processing_delay_ms).unwrap_or(u32::MAX);

    provide_context(ToastQueue::new());

    // アプリケーション状態
    let store = RwSignal::new(load_store(&config));
    let page = RwSignal::new(Page::Scan);
    let classifier = StoredValue::new_local(TransformersClassifier::new(
        config.model.clone(),
        config.device.clone(),
    ));
    on_cleanup(move || classifier.with_value(|c| c.dispose()));

    let active_image = Memo::new(move |_| store.with(|s| s.active_image().cloned()));
    let stats = Signal::derive(move || store.with(|s| s.stats()));

    // スキャン完了ハンドラ
    let on_scan_complete = move |image: ImageHandle| {
        store.update(|s| log_save_error(s.on_scan_complete(image)));
    };

    // リサイクル完了ハンドラ
    let on_recycled = move |item: String| {
        store.update(|s| log_save_error(s.on_item_recycled(&item)));
        console::log!(format!("Item recycled: {}", item));
    };

    let navigate = move |target: Page| {
        if target == Page::Scan {
            // スキャン画面へ戻るときは前回の結果を破棄する
            if let Some(image) = store.try_update(|s| s.clear_active_image()).flatten() {
                camera::revoke_object_url(&image);
            }
        }
        page.set(target);
    };

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="app">
            <Header on_rewards=move |_| navigate(Page::Rewards) />

            <main class="container">
                {move || match page.get() {
                    Page::Scan => view! {
                        <Show when=move || active_image.get().is_none()>
                            <div class="page-intro">
                                <h1>"Recycle with Vision"</h1>
                                <p class="text-muted">
                                    "Scan any item to get recycling information and earn rewards for your environmental efforts."
                                </p>
                            </div>
                        </Show>

                        {move || match active_image.get() {
                            None => view! {
                                <ScanSection
                                    on_scan_complete=on_scan_complete
                                    processing_delay_ms=processing_delay_ms
                                />
                            }
                            .into_any(),
                            Some(image) => view! {
                                <ResultsDisplay
                                    image=image
                                    classifier=classifier
                                    on_recycled=on_recycled
                                />
                            }
                            .into_any(),
                        }}

                        <ProgressDashboard
                            stats=stats
                            on_view_rewards=move |_| navigate(Page::Rewards)
                        />
                    }
                    .into_any(),
                    Page::Rewards => view! {
                        <RewardsPage store=store on_back=move |_| navigate(Page::Scan) />
                    }
                    .into_any(),
                }}
            </main>

            <footer class="footer">
                <p>{format!("© {} RecycleVision Rewards • Helping you recycle smarter", year)}</p>
            </footer>

            <Toaster />
        </div>
    }
}
