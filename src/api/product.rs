use super::{to_params, ApiClient, RequestOptions};
use crate::models::device::{
    CreateProductRequest, CreateProductResponse, GetProductsRequest, GetProductsResponse, Product,
    UpdateProductRequest, UpdateProductStatusRequest,
};
use crate::utils::error::Result;

/// Product management API
impl ApiClient {
    pub async fn get_products(&self, params: &GetProductsRequest) -> Result<GetProductsResponse> {
        self.get(
            "/api/product/list",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Product> {
        self.get(
            &format!("/api/product/{product_id}"),
            None,
            RequestOptions::default(),
        )
        .await
    }

    pub async fn create_product(
        &self,
        params: &CreateProductRequest,
    ) -> Result<CreateProductResponse> {
        self.post("/api/product", Some(to_params(params)?), RequestOptions::default())
            .await
    }

    pub async fn update_product(&self, params: &UpdateProductRequest) -> Result<()> {
        self.put("/api/product", Some(to_params(params)?), RequestOptions::default())
            .await
    }

    pub async fn update_product_status(&self, params: &UpdateProductStatusRequest) -> Result<()> {
        self.put(
            "/api/product/status",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    /// Delete one or more products; ids travel in the path.
    pub async fn delete_products(&self, product_ids: &[String]) -> Result<()> {
        self.delete(
            &format!("/api/product/{}", product_ids.join(",")),
            None,
            RequestOptions::default(),
        )
        .await
    }
}
