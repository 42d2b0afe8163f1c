//! Global Storefront State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The core
//! synchronizers own the truth; listeners copy it in here for rendering.

use candle_shop::{CartItem, Notice, Product, WishlistItem};
use leptos::prelude::*;
use reactive_stores::Store;

/// A notice currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Catalog as last fetched
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub cart_loading: bool,
    pub wishlist: Vec<WishlistItem>,
    pub wishlist_loading: bool,
    pub toasts: Vec<Toast>,
    pub signed_in: bool,
    pub cart_open: bool,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast, dropping the oldest beyond `limit`
pub fn store_push_toast(store: &ShopStore, toast: Toast, limit: usize) {
    let binding = store.toasts();
    let mut toasts = binding.write();
    toasts.push(toast);
    let excess = toasts.len().saturating_sub(limit.max(1));
    toasts.drain(..excess);
}

pub fn store_dismiss_toast(store: &ShopStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Two decimals, at the display boundary only
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
