//! 特典ページ
//!
//! ポイントの読み書きはすべて App と共有する RewardStore 経由で行う。

use crate::notify::use_toaster;
use crate::storage::BrowserStorage;
use gloo::console;
use leptos::prelude::*;
use recycle_vision_common::{RewardCatalogEntry, RewardStore, REWARD_CATALOG};

#[component]
pub fn RewardsPage<F>(store: RwSignal<RewardStore<BrowserStorage>>, on_back: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let toaster = use_toaster();
    let points = Memo::new(move |_| store.with(|s| s.state().points));

    let claim = move |entry: &'static RewardCatalogEntry| {
        match store.try_update(|s| s.redeem_reward(entry.title, entry.points)) {
            Some(Ok(outcome)) => toaster.push(outcome.notification()),
            Some(Err(e)) => console::error!(format!("Failed to save stats: {}", e)),
            None => {}
        }
    };

    view! {
        <div class="rewards-page">
            <div class="page-intro">
                <h1>"Your Rewards"</h1>
                <p class="text-muted">
                    "You have "
                    <span class="points-highlight">{move || format!("{} points", points.get())}</span>
                    " available to redeem"
                </p>
            </div>

            <div class="rewards-grid">
                {REWARD_CATALOG
                    .iter()
                    .map(|entry| {
                        let affordable = move || entry.is_affordable(points.get());
                        view! {
                            <div class="card reward-card">
                                <div class="card-header reward-header">
                                    <div>
                                        <h3>{entry.title}</h3>
                                        <p class="text-muted">{format!("{} points", entry.points)}</p>
                                    </div>
                                    <span class="reward-icon">{entry.icon.glyph()}</span>
                                </div>
                                <div class="card-content">
                                    <p class="text-muted text-small">{entry.description}</p>
                                </div>
                                <div class="card-footer">
                                    <button
                                        class=move || {
                                            if affordable() {
                                                "btn btn-primary btn-block"
                                            } else {
                                                "btn btn-muted btn-block"
                                            }
                                        }
                                        disabled=move || !affordable()
                                        on:click=move |_| claim(entry)
                                    >
                                        {move || entry.claim_label(points.get())}
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="text-center">
                <button class="btn btn-outline" on:click=move |_| on_back(())>
                    "Scan More Items to Earn Points"
                </button>
            </div>
        </div>
    }
}
