//! 進捗ダッシュボード
//!
//! リサイクル統計とレベル進捗を表示する。状態は変更しない。

use crate::components::progress_bar::ProgressBar;
use leptos::prelude::*;
use recycle_vision_common::DashboardStats;

#[component]
pub fn ProgressDashboard<F>(stats: Signal<DashboardStats>, on_view_rewards: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let recycle_rate = Signal::derive(move || stats.get().recycle_rate);
    let level_progress = Signal::derive(move || stats.get().level_progress);

    view! {
        <div class="dashboard">
            <div class="card">
                <div class="card-header">
                    <h3>"Your Recycling Stats"</h3>
                </div>
                <div class="card-content">
                    <div class="stat-row">
                        <span class="text-muted">"Items Scanned"</span>
                        <span class="stat-value">{move || stats.get().total_scans}</span>
                    </div>
                    <div class="stat-row">
                        <span class="text-muted">"Items Recycled"</span>
                        <span class="stat-value">{move || stats.get().total_recycled}</span>
                    </div>
                    <div class="stat-row">
                        <span class="text-muted">"Recycle Rate"</span>
                        <span class="stat-value">{move || format!("{}%", recycle_rate.get())}</span>
                    </div>
                    <ProgressBar value=recycle_rate />
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Rewards Progress"</h3>
                </div>
                <div class="card-content">
                    <div class="level-row">
                        <div class="level-badge">
                            <span class="level-icon">"⭐"</span>
                            <div>
                                <p class="stat-value">{move || format!("Level {}", stats.get().level)}</p>
                                <p class="text-muted">{move || format!("{} points", stats.get().points)}</p>
                            </div>
                        </div>
                        <div class="text-right">
                            <p class="stat-value">
                                {move || format!("{} pts to next level", stats.get().points_to_next_level)}
                            </p>
                            <p class="text-muted text-small">
                                {move || format!("Current streak: {}", stats.get().streak_label())}
                            </p>
                        </div>
                    </div>
                    <div class="stat-row">
                        <span class="text-muted">"Level Progress"</span>
                        <span>{move || format!("{}%", level_progress.get())}</span>
                    </div>
                    <ProgressBar value=level_progress />
                    <button class="link-button" on:click=move |_| on_view_rewards(())>
                        "View Available Rewards →"
                    </button>
                </div>
            </div>
        </div>
    }
}
