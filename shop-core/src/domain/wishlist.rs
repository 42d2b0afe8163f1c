//! Wishlist Entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, ProductId};
use super::product::Product;

/// A saved product on the shopper's wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Server wishlist-entry id
    #[serde(rename = "id", default)]
    pub entry_id: Option<String>,
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl WishlistItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            entry_id: None,
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

impl Entity for WishlistItem {
    fn id(&self) -> &ProductId {
        &self.product_id
    }

    fn association_id(&self) -> Option<&str> {
        self.entry_id.as_deref()
    }
}
