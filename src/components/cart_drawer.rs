//! Cart Drawer Component
//!
//! Slide-out cart with quantity steppers, line removal and the running total.

use candle_shop::CartItem;
use leptos::prelude::*;

use super::ClearButton;
use crate::context::use_shop;
use crate::store::{format_price, use_shop_store, ShopStateStoreFields};

#[component]
fn CartLine(line: CartItem) -> impl IntoView {
    let ctx = use_shop();
    let quantity = i64::from(line.quantity);
    let (down_id, up_id, remove_id) = (line.product_id.clone(), line.product_id.clone(), line.product_id.clone());

    view! {
        <li class="cart-line">
            <span class="cart-line-name">{line.name.clone()}</span>
            <span class="cart-line-price">{format_price(line.price)}</span>
            <div class="quantity-stepper">
                <button on:click=move |_| ctx.set_quantity(down_id.clone(), quantity - 1)>"−"</button>
                <span class="quantity">{line.quantity}</span>
                <button on:click=move |_| ctx.set_quantity(up_id.clone(), quantity + 1)>"+"</button>
            </div>
            <span class="cart-line-total">{format_price(line.line_total())}</span>
            <button class="remove-btn" on:click=move |_| ctx.remove_from_cart(remove_id.clone())>
                "×"
            </button>
        </li>
    }
}

#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_shop();
    let store = use_shop_store();

    let total = Memo::new(move |_| store.cart().read().iter().map(CartItem::line_total).sum::<f64>());
    let is_empty = move || store.cart().read().is_empty();

    view! {
        <aside class=move || if store.cart_open().get() { "cart-drawer open" } else { "cart-drawer" }>
            <header class="drawer-header">
                <h2>"Your cart"</h2>
                <Show when=move || store.cart_loading().get()>
                    <span class="loading">"Syncing…"</span>
                </Show>
                <button class="close-btn" on:click=move |_| store.cart_open().set(false)>"×"</button>
            </header>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty-note">"Your cart is empty"</p> }
            >
                <ul class="cart-lines">
                    <For
                        // Quantity in the key so a changed line re-renders
                        each=move || store.cart().get()
                        key=|line| (line.product_id.clone(), line.quantity)
                        children=move |line| view! { <CartLine line=line /> }
                    />
                </ul>
                <footer class="drawer-footer">
                    <span class="cart-total">"Total: " {move || format_price(total.get())}</span>
                    <ClearButton noun="cart" on_clear=move |_| ctx.clear_cart() />
                </footer>
            </Show>
        </aside>
    }
}
