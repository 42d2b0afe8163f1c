//! Catalog Service
//!
//! Read-only product listing; supplies the display fields passed to `add()`.

use std::rc::Rc;

use super::client::ApiClient;
use crate::domain::Product;
use crate::error::ApiResult;

pub struct HttpCatalogService {
    client: Rc<ApiClient>,
}

impl HttpCatalogService {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.client.get("/products").await
    }
}
