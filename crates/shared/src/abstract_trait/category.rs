use crate::{
    domain::{
        requests::CreateCategoryRequest,
        responses::{ApiResponse, CategoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;
pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;
pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;
pub type DynCategoryCommandService = Arc<dyn CategoryCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
}

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create(&self, name: &str) -> Result<Category, RepositoryError>;
    async fn update(&self, id: i32, name: &str) -> Result<(), RepositoryError>;
    /// Removes the category and its product links in one transaction.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError>;
}

#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        id: i32,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
