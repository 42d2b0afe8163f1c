//! Wishlist Panel Component

use candle_shop::{Product, WishlistItem};
use leptos::prelude::*;

use super::ClearButton;
use crate::context::use_shop;
use crate::store::{format_price, use_shop_store, ShopStateStoreFields};

fn as_product(entry: &WishlistItem) -> Product {
    Product {
        image_url: entry.image_url.clone(),
        ..Product::new(entry.product_id.clone(), entry.name.clone(), entry.price)
    }
}

#[component]
pub fn WishlistPanel() -> impl IntoView {
    let ctx = use_shop();
    let store = use_shop_store();

    view! {
        <section class="wishlist-panel">
            <header class="panel-header">
                <h2>"Wishlist"</h2>
                <span class="wishlist-count">{move || store.wishlist().read().len()}</span>
            </header>
            <Show
                when=move || !store.wishlist().read().is_empty()
                fallback=|| view! { <p class="empty-note">"Nothing saved yet"</p> }
            >
                <ul class="wishlist-entries">
                    <For
                        each=move || store.wishlist().get()
                        key=|entry| entry.product_id.clone()
                        children=move |entry| {
                            let product = as_product(&entry);
                            let product_id = entry.product_id.clone();
                            view! {
                                <li class="wishlist-entry">
                                    <span class="entry-name">{entry.name.clone()}</span>
                                    <span class="entry-price">{format_price(entry.price)}</span>
                                    <button class="move-to-cart-btn" on:click=move |_| ctx.add_to_cart(product.clone())>
                                        "Add to cart"
                                    </button>
                                    <button class="remove-btn" on:click=move |_| ctx.remove_from_wishlist(product_id.clone())>
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <ClearButton noun="wishlist" on_clear=move |_| ctx.clear_wishlist() />
            </Show>
        </section>
    }
}
