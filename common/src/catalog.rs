//! 固定カタログ
//!
//! - RECYCLING_DATABASE: モックのリサイクル情報（5件）
//! - REWARD_CATALOG: 交換可能な特典（3件）

use rand::Rng;

/// リサイクル情報1件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecyclingRecord {
    pub name: &'static str,
    pub material: &'static str,
    pub recyclable: bool,
    pub instructions: &'static str,
    pub disposal: &'static str,
}

impl RecyclingRecord {
    /// バッジ表示用ラベル
    pub fn badge(&self) -> &'static str {
        if self.recyclable {
            "Recyclable"
        } else {
            "Non-Recyclable"
        }
    }
}

/// モックのリサイクルデータベース
pub static RECYCLING_DATABASE: [RecyclingRecord; 5] = [
    RecyclingRecord {
        name: "Plastic Bottle",
        material: "PET Plastic",
        recyclable: true,
        instructions: "Remove cap and label if possible. Rinse and compress before recycling.",
        disposal: "Blue recycling bin",
    },
    RecyclingRecord {
        name: "Cardboard Box",
        material: "Cardboard",
        recyclable: true,
        instructions: "Flatten completely. Remove any tape or labels if possible.",
        disposal: "Paper recycling bin",
    },
    RecyclingRecord {
        name: "Glass Jar",
        material: "Glass",
        recyclable: true,
        instructions: "Remove lid and rinse thoroughly before recycling.",
        disposal: "Glass recycling container",
    },
    RecyclingRecord {
        name: "Coffee Cup",
        material: "Paper with Plastic Lining",
        recyclable: false,
        instructions: "Most coffee cups have a plastic lining that makes them non-recyclable.",
        disposal: "General waste",
    },
    RecyclingRecord {
        name: "Aluminum Can",
        material: "Aluminum",
        recyclable: true,
        instructions: "Rinse thoroughly. No need to remove labels.",
        disposal: "Metal recycling bin",
    },
];

/// データベースから一様ランダムに1件選ぶ
///
/// 分類ラベルは参照しない。
pub fn pick_random_record<R: Rng + ?Sized>(rng: &mut R) -> &'static RecyclingRecord {
    &RECYCLING_DATABASE[rng.gen_range(0..RECYCLING_DATABASE.len())]
}

/// 特典アイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardIcon {
    Trophy,
    Star,
    ChartBar,
}

impl RewardIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            RewardIcon::Trophy => "🏆",
            RewardIcon::Star => "⭐",
            RewardIcon::ChartBar => "📊",
        }
    }
}

/// 特典カタログ1件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardCatalogEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub icon: RewardIcon,
}

impl RewardCatalogEntry {
    /// 現在のポイントで交換できるか
    pub fn is_affordable(&self, points: u32) -> bool {
        points >= self.points
    }

    /// 交換ボタンのラベル
    pub fn claim_label(&self, points: u32) -> &'static str {
        if self.is_affordable(points) {
            "Claim Reward"
        } else {
            "Not Enough Points"
        }
    }
}

pub static REWARD_CATALOG: [RewardCatalogEntry; 3] = [
    RewardCatalogEntry {
        title: "10% Discount",
        description: "Get 10% off your next purchase at participating eco-friendly stores",
        points: 100,
        icon: RewardIcon::Trophy,
    },
    RewardCatalogEntry {
        title: "Plant a Tree",
        description: "We'll plant a tree in your name through our reforestation partners",
        points: 250,
        icon: RewardIcon::Star,
    },
    RewardCatalogEntry {
        title: "Reusable Kit",
        description: "Receive a free reusable shopping bag, water bottle, and utensil set",
        points: 500,
        icon: RewardIcon::ChartBar,
    },
];

/// タイトル（大文字小文字無視）または1始まりの番号で特典を探す
pub fn find_reward(query: &str) -> Option<&'static RewardCatalogEntry> {
    let query = query.trim();
    if let Ok(index) = query.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| REWARD_CATALOG.get(i));
    }
    REWARD_CATALOG
        .iter()
        .find(|entry| entry.title.eq_ignore_ascii_case(query))
}
