//! Product Entity
//!
//! Catalog display fields captured when an item is put in the cart or wishlist.

use serde::{Deserialize, Serialize};

use super::entity::ProductId;

/// A catalog product as listed by the storefront API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Units on hand, when the API reports it
    #[serde(default)]
    pub stock: Option<u32>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: None,
            stock: None,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |n| n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{"id":"p-1","name":"Amber Soy","price":24.5,"imageUrl":"/img/amber.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p-1");
        assert_eq!(product.image_url.as_deref(), Some("/img/amber.jpg"));
        assert_eq!(product.stock, None);
        assert!(product.in_stock());
    }

    #[test]
    fn test_out_of_stock() {
        let mut product = Product::new("p-2", "Cedar Wick", 18.0);
        product.stock = Some(0);
        assert!(!product.in_stock());
    }
}
