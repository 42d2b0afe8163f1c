//! Cart Entity
//!
//! One line of the shopper's cart, keyed locally by product.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, ProductId};
use super::product::Product;

/// A cart line mirrored from the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Server cart-line id (`None` until the line has been loaded)
    #[serde(rename = "id", default)]
    pub line_id: Option<String>,
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// Optimistic line for a product that is not in the cart yet
    pub fn from_product(product: &Product) -> Self {
        Self {
            line_id: None,
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Entity for CartItem {
    fn id(&self) -> &ProductId {
        &self.product_id
    }

    fn association_id(&self) -> Option<&str> {
        self.line_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_starts_at_one() {
        let product = Product::new("p-1", "Fig Leaf", 22.0);
        let item = CartItem::from_product(&product);
        assert_eq!(item.id(), "p-1");
        assert_eq!(item.quantity, 1);
        assert!(item.association_id().is_none());
    }

    #[test]
    fn test_line_id_comes_from_record_id() {
        let json = r#"{"id":"line-9","productId":"p-1","name":"Fig Leaf","price":22.0,"quantity":3}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.association_id(), Some("line-9"));
        assert_eq!(item.line_total(), 66.0);
    }
}
