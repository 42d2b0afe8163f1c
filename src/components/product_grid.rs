//! Product Grid Component

use leptos::prelude::*;

use super::ProductCard;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <section class="product-grid">
            <For
                each=move || store.products().get()
                key=|product| product.id.clone()
                children=move |product| view! { <ProductCard product=product /> }
            />
        </section>
    }
}
