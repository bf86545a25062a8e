//! トースト表示コンポーネント

use crate::notify::use_toaster;
use leptos::prelude::*;

#[component]
pub fn Toaster() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toaster">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let variant = toast.notification.variant.as_str();
                    view! {
                        <div
                            class=format!("toast toast-{}", variant)
                            on:click=move |_| toaster.dismiss(id)
                        >
                            <p class="toast-title">{toast.notification.title.clone()}</p>
                            <p class="toast-description">{toast.notification.description.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
