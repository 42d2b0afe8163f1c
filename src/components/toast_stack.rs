//! Toast Stack Component
//!
//! Renders pending notices; each one also dismisses itself on a timer.

use candle_shop::NoticeLevel;
use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_shop_store, ShopStateStoreFields};

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast success",
        NoticeLevel::Info => "toast info",
        NoticeLevel::Error => "toast error",
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=level_class(toast.notice.level)
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            {toast.notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
