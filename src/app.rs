//! Candle Shop Frontend App
//!
//! Header with cart toggle and sign-in, the catalog grid, the wishlist panel
//! and the slide-out cart drawer.

use candle_shop::config::DEFAULT_API_URL;
use candle_shop::ShopConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CartDrawer, ProductGrid, SignInForm, ToastStack, WishlistPanel};
use crate::context::ShopContext;
use crate::store::{ShopState, ShopStateStoreFields};

/// API base URL baked in at build time
fn shop_config() -> ShopConfig {
    ShopConfig::with_api_url(option_env!("CANDLE_SHOP_API_URL").unwrap_or(DEFAULT_API_URL))
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ShopState::default());
    provide_context(store);

    let ctx = match ShopContext::new(&shop_config(), store) {
        Ok(ctx) => ctx,
        Err(err) => {
            log::error!("Storefront client failed to start: {}", err);
            return view! { <p class="startup-error">"The shop is unavailable right now."</p> }.into_any();
        }
    };
    provide_context(ctx);

    ctx.load_products();
    ctx.restore_session();

    let item_count = move || store.cart().read().iter().map(|line| line.quantity).sum::<u32>();

    view! {
        <div class="shop-layout">
            <header class="shop-header">
                <h1>"Candle Shop"</h1>
                <SignInForm />
                <button class="cart-toggle" on:click=move |_| store.cart_open().update(|open| *open = !*open)>
                    "Cart (" {item_count} ")"
                </button>
            </header>

            <main class="shop-content">
                <ProductGrid />
                <Show when=move || store.signed_in().get()>
                    <WishlistPanel />
                </Show>
            </main>

            <CartDrawer />
            <ToastStack />
        </div>
    }
    .into_any()
}
