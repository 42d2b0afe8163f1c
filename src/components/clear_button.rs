//! Clear Button Component
//!
//! Two-tap button for emptying a whole collection.

use leptos::prelude::*;

/// First tap arms the button, a second tap within the same arming clears.
/// Leaving the button disarms it.
#[component]
pub fn ClearButton(
    /// What gets emptied, e.g. "cart"
    noun: &'static str,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    let on_click = move |_: web_sys::MouseEvent| {
        if armed.get_untracked() {
            set_armed.set(false);
            on_clear.run(());
        } else {
            set_armed.set(true);
        }
    };

    view! {
        <button
            class=move || if armed.get() { "clear-btn armed" } else { "clear-btn" }
            on:click=on_click
            on:mouseleave=move |_| set_armed.set(false)
        >
            {move || if armed.get() { format!("Tap again to empty your {}", noun) } else { format!("Clear {}", noun) }}
        </button>
    }
}
