//! Sign In Form Component
//!
//! Accepts a bearer token issued by the storefront API. Once signed in it
//! shows who is signed in and a sign-out button instead.

use leptos::prelude::*;

use crate::context::use_shop;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn SignInForm() -> impl IntoView {
    let ctx = use_shop();
    let store = use_shop_store();
    let (token, set_token) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = token.get();
        if value.trim().is_empty() {
            return;
        }
        ctx.sign_in(value);
        set_token.set(String::new());
    };

    let shopper = move || {
        store.signed_in().track();
        ctx.claims()
            .map(|claims| claims.email.unwrap_or(claims.sub))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || store.signed_in().get()
            fallback=move || view! {
                <form class="sign-in-form" on:submit=on_submit>
                    <input
                        type="password"
                        placeholder="Access token"
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                    />
                    <button type="submit">"Sign in"</button>
                </form>
            }
        >
            <div class="signed-in">
                <span class="shopper">{shopper}</span>
                <button class="sign-out-btn" on:click=move |_| ctx.sign_out()>"Sign out"</button>
            </div>
        </Show>
    }
}
