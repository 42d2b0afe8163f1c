//! Domain Layer
//!
//! Client-side mirrors of the storefront records the synchronizers manage.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod product;
mod cart;
mod wishlist;

pub use entity::{Entity, ProductId};
pub use product::Product;
pub use cart::CartItem;
pub use wishlist::WishlistItem;
