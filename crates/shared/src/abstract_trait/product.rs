use crate::{
    domain::{
        requests::{CreateProductRequest, FindProducts, UpdateProductRequest},
        responses::{AdminProductResponse, ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Product, ProductWithCategories, ProductWithCategoryIds},
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_active(
        &self,
        category_id: Option<i32>,
    ) -> Result<Vec<ProductWithCategories>, RepositoryError>;
    async fn find_active_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_all_admin(&self) -> Result<Vec<ProductWithCategoryIds>, RepositoryError>;
    /// Authoritative read inside the checkout transaction; returns only
    /// active products.
    async fn find_for_checkout(
        &self,
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Option<Product>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_with_categories(
        &self,
        req: &CreateProductRequest,
    ) -> Result<i32, RepositoryError>;
    async fn update_with_categories(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<(), RepositoryError>;
    async fn toggle_active(&self, id: i32) -> Result<bool, RepositoryError>;
    /// Stock decrement executed inside the checkout transaction.
    async fn decrement_stock(
        &self,
        conn: &mut PgConnection,
        id: i32,
        quantity: Decimal,
    ) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_active(
        &self,
        params: &FindProducts,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_active_by_id(&self, id: i32)
    -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn find_all_admin(
        &self,
    ) -> Result<ApiResponse<Vec<AdminProductResponse>>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<i32>, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn toggle_product(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError>;
}
