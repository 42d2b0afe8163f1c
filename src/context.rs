//! Storefront Context
//!
//! Owns the core `Shop` handles for the lifetime of the app, mirrors their
//! state into the `ShopStore`, and turns user intents into spawned tasks.

use std::cell::Cell;
use std::rc::Rc;

use candle_shop::{ApiResult, Claims, Notice, Notifier, Product, Shop, ShopConfig, TokenError};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss_toast, store_push_toast, ShopStateStoreFields, ShopStore, Toast};

const TOKEN_KEY: &str = "candle_shop_token";
const TOAST_MILLIS: u32 = 3_500;

/// Shows core notices as toasts that dismiss themselves
pub struct StoreNotifier {
    store: ShopStore,
    next_id: Cell<u32>,
    limit: usize,
}

impl StoreNotifier {
    pub fn new(store: ShopStore, limit: usize) -> Self {
        Self {
            store,
            next_id: Cell::new(0),
            limit,
        }
    }
}

impl Notifier for StoreNotifier {
    fn notify(&self, notice: Notice) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        store_push_toast(&self.store, Toast { id, notice }, self.limit);

        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            store_dismiss_toast(&store, id);
        });
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn forget_token() {
    if let Some(storage) = local_storage() {
        if storage.remove_item(TOKEN_KEY).is_err() {
            log::warn!("Could not remove saved session token");
        }
    }
}

/// Handles to the storefront core, provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    shop: StoredValue<Rc<Shop>, LocalStorage>,
    notifier: StoredValue<Rc<StoreNotifier>, LocalStorage>,
    store: ShopStore,
}

impl ShopContext {
    pub fn new(config: &ShopConfig, store: ShopStore) -> ApiResult<Self> {
        let notifier = Rc::new(StoreNotifier::new(store, config.toast_limit));
        let shop = Shop::connect(config, notifier.clone())?;

        shop.cart.subscribe(move |items, loading| {
            store.cart().set(items.to_vec());
            store.cart_loading().set(loading);
        });
        shop.wishlist.subscribe(move |items, loading| {
            store.wishlist().set(items.to_vec());
            store.wishlist_loading().set(loading);
        });

        let mut auth = shop.session.subscribe();
        spawn_local(async move {
            while auth.changed().await.is_ok() {
                let signed_in = *auth.borrow_and_update();
                store.signed_in().set(signed_in);
            }
        });

        Ok(Self {
            shop: StoredValue::new_local(Rc::new(shop)),
            notifier: StoredValue::new_local(notifier),
            store,
        })
    }

    fn shop(&self) -> Rc<Shop> {
        self.shop.get_value()
    }

    pub fn claims(&self) -> Option<Claims> {
        self.shop().session.claims()
    }

    // ========================
    // Catalog
    // ========================

    pub fn load_products(&self) {
        let shop = self.shop();
        let notifier = self.notifier.get_value();
        let store = self.store;
        spawn_local(async move {
            match shop.catalog.list_products().await {
                Ok(products) => store.products().set(products),
                Err(err) => {
                    log::error!("Failed to load products: {}", err);
                    notifier.notify(Notice::error(err.user_message("Failed to load products")));
                }
            }
        });
    }

    // ========================
    // Session
    // ========================

    /// Resume the session of a token saved by an earlier sign-in
    pub fn restore_session(&self) {
        let Some(token) = local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten()) else {
            return;
        };
        let shop = self.shop();
        spawn_local(async move {
            if let Err(err) = shop.session.sign_in(&token).await {
                log::warn!("Saved token rejected: {}", err);
                if err != TokenError::Interrupted {
                    forget_token();
                }
            }
        });
    }

    pub fn sign_in(&self, token: String) {
        let shop = self.shop();
        let notifier = self.notifier.get_value();
        spawn_local(async move {
            match shop.session.sign_in(&token).await {
                Ok(_) => {
                    if let Some(storage) = local_storage() {
                        if storage.set_item(TOKEN_KEY, token.trim()).is_err() {
                            log::warn!("Could not persist session token");
                        }
                    }
                }
                Err(TokenError::Interrupted) => log::debug!("Sign-in abandoned"),
                Err(err) => notifier.notify(Notice::error(err.to_string())),
            }
        });
    }

    pub fn sign_out(&self) {
        forget_token();
        self.shop().session.sign_out();
    }

    // ========================
    // Cart
    // ========================

    pub fn add_to_cart(&self, product: Product) {
        let shop = self.shop();
        spawn_local(async move {
            shop.cart.add(&product).await;
        });
    }

    pub fn set_quantity(&self, product_id: String, quantity: i64) {
        let shop = self.shop();
        spawn_local(async move {
            shop.cart.update_quantity(&product_id, quantity).await;
        });
    }

    pub fn remove_from_cart(&self, product_id: String) {
        let shop = self.shop();
        spawn_local(async move {
            shop.cart.remove(&product_id).await;
        });
    }

    pub fn clear_cart(&self) {
        let shop = self.shop();
        spawn_local(async move {
            shop.cart.clear().await;
        });
    }

    // ========================
    // Wishlist
    // ========================

    pub fn toggle_wishlist(&self, product: Product) {
        let shop = self.shop();
        spawn_local(async move {
            shop.wishlist.toggle(&product).await;
        });
    }

    pub fn remove_from_wishlist(&self, product_id: String) {
        let shop = self.shop();
        spawn_local(async move {
            shop.wishlist.remove(&product_id).await;
        });
    }

    pub fn clear_wishlist(&self) {
        let shop = self.shop();
        spawn_local(async move {
            shop.wishlist.clear().await;
        });
    }
}

/// Get the shop context
pub fn use_shop() -> ShopContext {
    expect_context::<ShopContext>()
}
