//! トースト通知
//!
//! App直下で1つ生成し、context経由で各コンポーネントから push する。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use recycle_vision_common::Notification;

/// 表示時間（ミリ秒）
const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|t| t.push(Toast { id, notification }));

        let toaster = *self;
        Timeout::new(TOAST_DURATION_MS, move || toaster.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> ToastQueue {
    expect_context::<ToastQueue>()
}
