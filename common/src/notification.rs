//! ユーザー通知（トースト）
//!
//! エラーを含むすべてのユーザー向けメッセージはここで文言化される。

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

impl NotificationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationVariant::Default => "default",
            NotificationVariant::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    pub fn item_scanned() -> Self {
        Self::new("Item Scanned!", "Processing your item for recycling information...")
    }

    pub fn item_captured() -> Self {
        Self::new("Item Captured!", "Processing your item for recycling information...")
    }

    pub fn camera_error() -> Self {
        Self::destructive(
            "Camera Error",
            "Could not access your camera. Please check permissions.",
        )
    }

    pub fn analysis_complete(label: &str) -> Self {
        Self::new("Analysis Complete", format!("Detected: {}", label))
    }

    pub fn analysis_failed() -> Self {
        Self::destructive(
            "Analysis Failed",
            "Could not identify your item. Please try again.",
        )
    }

    pub fn item_recycled() -> Self {
        Self::new("Great job!", "You've successfully recycled this item.")
    }

    pub fn reward_claimed(title: &str) -> Self {
        Self::new("Reward Claimed!", format!("You've successfully claimed: {}", title))
    }

    pub fn insufficient_points(shortfall: u32) -> Self {
        Self::destructive(
            "Not enough points",
            format!("You need {} more points to claim this reward.", shortfall),
        )
    }

    /// エラーを通知へ変換する
    ///
    /// 永続化系のエラーはユーザーに見せないため None。
    pub fn from_error(error: &Error) -> Option<Self> {
        match error {
            Error::Permission(_) => Some(Self::camera_error()),
            Error::Classification(_) => Some(Self::analysis_failed()),
            _ => None,
        }
    }
}
