use crate::{
    domain::{
        requests::{CreateBannerRequest, FindBanners},
        responses::{ApiResponse, BannerResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Banner,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBannerQueryRepository = Arc<dyn BannerQueryRepositoryTrait + Send + Sync>;
pub type DynBannerCommandRepository = Arc<dyn BannerCommandRepositoryTrait + Send + Sync>;
pub type DynBannerQueryService = Arc<dyn BannerQueryServiceTrait + Send + Sync>;
pub type DynBannerCommandService = Arc<dyn BannerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait BannerQueryRepositoryTrait {
    async fn find_active(&self, banner_type: &str) -> Result<Vec<Banner>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Banner>, RepositoryError>;
}

#[async_trait]
pub trait BannerCommandRepositoryTrait {
    /// Inserts the desktop/mobile pair in one transaction.
    async fn create_pair(&self, req: &CreateBannerRequest) -> Result<(), RepositoryError>;
    async fn toggle_active(&self, id: i32) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait BannerQueryServiceTrait {
    async fn find_active(
        &self,
        params: &FindBanners,
    ) -> Result<ApiResponse<Vec<BannerResponse>>, ServiceError>;
    async fn find_all(&self) -> Result<ApiResponse<Vec<BannerResponse>>, ServiceError>;
}

#[async_trait]
pub trait BannerCommandServiceTrait {
    async fn create_banners(
        &self,
        req: &CreateBannerRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn toggle_banner(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError>;
    async fn delete_banner(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
