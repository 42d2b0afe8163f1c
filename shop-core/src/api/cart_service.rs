//! Cart Service
//!
//! REST implementation of the cart endpoints.

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;

use super::client::{path_segment, ApiClient};
use super::traits::{CollectionService, QuantityService};
use crate::domain::CartItem;
use crate::error::ApiResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCart<'a> {
    product_id: &'a str,
    quantity: u32,
}

#[derive(Serialize)]
struct QuantityArgs {
    quantity: u32,
}

pub struct HttpCartService {
    client: Rc<ApiClient>,
}

impl HttpCartService {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl CollectionService<CartItem> for HttpCartService {
    async fn fetch_all(&self) -> ApiResult<Vec<CartItem>> {
        self.client.get("/cart").await
    }

    async fn add(&self, entry: &CartItem) -> ApiResult<()> {
        let args = AddToCart {
            product_id: &entry.product_id,
            quantity: entry.quantity,
        };
        self.client.post("/cart/items", &args).await
    }

    async fn remove(&self, association_id: &str) -> ApiResult<()> {
        self.client
            .delete(&format!("/cart/items/{}", path_segment(association_id)))
            .await
    }

    async fn clear(&self) -> ApiResult<()> {
        self.client.delete("/cart").await
    }
}

#[async_trait(?Send)]
impl QuantityService<CartItem> for HttpCartService {
    async fn update_quantity(&self, association_id: &str, quantity: u32) -> ApiResult<()> {
        self.client
            .put(
                &format!("/cart/items/{}", path_segment(association_id)),
                &QuantityArgs { quantity },
            )
            .await
    }
}
