//! ダッシュボード表示用の派生値
//!
//! RewardState の純粋関数のみ。状態は変更しない。

use crate::types::RewardState;

/// 1レベルあたりのポイント
pub const POINTS_PER_LEVEL: u32 = 50;

/// ダッシュボードに表示する統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_scans: u32,
    pub total_recycled: u32,
    pub points: u32,
    pub streak: u32,
    /// リサイクル率（%）
    pub recycle_rate: u32,
    pub level: u32,
    /// 次レベルまでの進捗（%）、0..100
    pub level_progress: u32,
    pub points_to_next_level: u32,
}

impl DashboardStats {
    pub fn from_state(state: &RewardState) -> Self {
        Self {
            total_scans: state.total_scans,
            total_recycled: state.total_recycled,
            points: state.points,
            streak: state.streak,
            recycle_rate: recycle_rate(state.total_recycled, state.total_scans),
            level: level(state.points),
            level_progress: level_progress(state.points),
            points_to_next_level: points_to_next_level(state.points),
        }
    }

    /// "1 day" / "3 days"
    pub fn streak_label(&self) -> String {
        if self.streak == 1 {
            format!("{} day", self.streak)
        } else {
            format!("{} days", self.streak)
        }
    }
}

impl From<&RewardState> for DashboardStats {
    fn from(state: &RewardState) -> Self {
        Self::from_state(state)
    }
}

/// round(100 * recycled / scans)。スキャン0件なら0
pub fn recycle_rate(total_recycled: u32, total_scans: u32) -> u32 {
    if total_scans == 0 {
        return 0;
    }
    (f64::from(total_recycled) / f64::from(total_scans) * 100.0).round() as u32
}

pub fn level(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

pub fn level_progress(points: u32) -> u32 {
    (points % POINTS_PER_LEVEL) * 100 / POINTS_PER_LEVEL
}

pub fn points_to_next_level(points: u32) -> u32 {
    POINTS_PER_LEVEL - points % POINTS_PER_LEVEL
}
