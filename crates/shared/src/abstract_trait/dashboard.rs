use crate::{
    domain::responses::{ApiResponse, DashboardResponse},
    errors::{RepositoryError, ServiceError},
    model::DashboardSummary,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDashboardQueryRepository = Arc<dyn DashboardQueryRepositoryTrait + Send + Sync>;
pub type DynDashboardQueryService = Arc<dyn DashboardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait DashboardQueryRepositoryTrait {
    async fn summary(&self) -> Result<DashboardSummary, RepositoryError>;
}

#[async_trait]
pub trait DashboardQueryServiceTrait {
    async fn summary(&self) -> Result<ApiResponse<DashboardResponse>, ServiceError>;
}
