//! 特典交換

use crate::error::{RecycleVisionError, Result};
use recycle_vision_common::{find_reward, RedeemOutcome, RewardStore, StateStorage};

/// 番号（1始まり）またはタイトルで特典を指定して交換する
///
/// ポイント不足は `RedeemOutcome::Insufficient` として返し、エラーにはしない。
pub fn redeem<S: StateStorage>(store: &mut RewardStore<S>, query: &str) -> Result<RedeemOutcome> {
    let entry =
        find_reward(query).ok_or_else(|| RecycleVisionError::RewardNotFound(query.to_string()))?;
    Ok(store.redeem_reward(entry.title, entry.points)?)
}
