//! RecycleVision Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod capture;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod notification;
pub mod scan;
pub mod stats;
pub mod store;
pub mod types;

pub use capture::{CameraCommand, CaptureMode, CapturePhase, CaptureSource, CaptureState};
pub use catalog::{
    find_reward, pick_random_record, RecyclingRecord, RewardCatalogEntry, RewardIcon,
    RECYCLING_DATABASE, REWARD_CATALOG,
};
pub use classifier::{parse_classifier_output, Classifier};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use notification::{Notification, NotificationVariant};
pub use scan::{identify, Identification, ScanSession, ScanStatus};
pub use stats::DashboardStats;
pub use store::{MemoryStorage, RedeemOutcome, RewardStore, StateStorage};
pub use types::{ClassificationResult, ImageHandle, RewardState};
