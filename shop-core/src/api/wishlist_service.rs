//! Wishlist Service
//!
//! REST implementation of the wishlist endpoints.

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;

use super::client::{path_segment, ApiClient};
use super::traits::CollectionService;
use crate::domain::WishlistItem;
use crate::error::ApiResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToWishlist<'a> {
    product_id: &'a str,
}

pub struct HttpWishlistService {
    client: Rc<ApiClient>,
}

impl HttpWishlistService {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl CollectionService<WishlistItem> for HttpWishlistService {
    async fn fetch_all(&self) -> ApiResult<Vec<WishlistItem>> {
        self.client.get("/wishlist").await
    }

    async fn add(&self, entry: &WishlistItem) -> ApiResult<()> {
        let args = AddToWishlist {
            product_id: &entry.product_id,
        };
        self.client.post("/wishlist", &args).await
    }

    async fn remove(&self, association_id: &str) -> ApiResult<()> {
        self.client
            .delete(&format!("/wishlist/{}", path_segment(association_id)))
            .await
    }

    async fn clear(&self) -> ApiResult<()> {
        self.client.delete("/wishlist").await
    }
}
