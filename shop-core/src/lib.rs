//! Candle Shop Client Core
//!
//! Layered architecture:
//! - domain: Client-side mirrors of storefront records
//! - api: REST envelope, HTTP client and domain services
//! - sync: Optimistic cart and wishlist synchronization
//! - session: Authentication lifecycle and token claims
//! - notify: Toast notification channel

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod session;
pub mod sync;

use std::rc::Rc;

pub use config::ShopConfig;
pub use domain::{CartItem, Entity, Product, ProductId, WishlistItem};
pub use error::{ApiError, ApiResult, ConfigError, TokenError};
pub use notify::{Notice, NoticeLevel, Notifier, ToastQueue};
pub use session::{AuthAware, Claims, ShopSession};
pub use sync::{CartSync, MutationOutcome, WishlistSync};

use api::{ApiClient, HttpCartService, HttpCatalogService, HttpWishlistService};

pub type Cart = CartSync<HttpCartService>;
pub type Wishlist = WishlistSync<HttpWishlistService>;

/// Everything a storefront front end needs, wired against the REST API
pub struct Shop {
    pub session: Rc<ShopSession>,
    pub cart: Rc<Cart>,
    pub wishlist: Rc<Wishlist>,
    pub catalog: Rc<HttpCatalogService>,
}

impl Shop {
    pub fn connect(config: &ShopConfig, notifier: Rc<dyn Notifier>) -> ApiResult<Self> {
        let client = Rc::new(ApiClient::new(config)?);

        let cart = Rc::new(CartSync::new(HttpCartService::new(client.clone()), notifier.clone()));
        let wishlist = Rc::new(WishlistSync::new(
            HttpWishlistService::new(client.clone()),
            notifier,
        ));
        let catalog = Rc::new(HttpCatalogService::new(client.clone()));

        let session = Rc::new(ShopSession::new(client));
        session.register(cart.clone());
        session.register(wishlist.clone());

        log::info!("Storefront client ready for {}", config.api_base_url);
        Ok(Self {
            session,
            cart,
            wishlist,
            catalog,
        })
    }
}
