//! Product Card Component
//!
//! One catalog entry with add-to-cart and a wishlist heart.

use candle_shop::Product;
use leptos::prelude::*;

use crate::context::use_shop;
use crate::store::{format_price, use_shop_store, ShopStateStoreFields};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_shop();
    let store = use_shop_store();

    let id = product.id.clone();
    let wished = Memo::new(move |_| store.wishlist().read().iter().any(|entry| entry.product_id == id));
    let id = product.id.clone();
    let in_cart = Memo::new(move |_| {
        store
            .cart()
            .read()
            .iter()
            .find(|line| line.product_id == id)
            .map_or(0, |line| line.quantity)
    });

    let in_stock = product.in_stock();
    let for_cart = product.clone();
    let for_wishlist = product.clone();

    view! {
        <article class="product-card">
            {product.image_url.clone().map(|src| view! { <img class="product-image" src=src alt=product.name.clone() /> })}
            <h3 class="product-name">{product.name.clone()}</h3>
            <p class="product-price">{format_price(product.price)}</p>
            <div class="product-actions">
                <button
                    class="add-to-cart-btn"
                    disabled=!in_stock
                    on:click=move |_| ctx.add_to_cart(for_cart.clone())
                >
                    {if in_stock { "Add to cart" } else { "Sold out" }}
                </button>
                <button
                    class=move || if wished.get() { "wishlist-btn active" } else { "wishlist-btn" }
                    on:click=move |_| ctx.toggle_wishlist(for_wishlist.clone())
                >
                    {move || if wished.get() { "♥" } else { "♡" }}
                </button>
            </div>
            <Show when=move || { in_cart.get() > 0 }>
                <span class="in-cart-badge">{move || format!("{} in cart", in_cart.get())}</span>
            </Show>
        </article>
    }
}
