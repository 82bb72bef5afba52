use crate::{
    abstract_trait::{DashboardQueryServiceTrait, DynDashboardQueryRepository},
    domain::responses::{ApiResponse, DashboardResponse},
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct DashboardQueryService {
    query: DynDashboardQueryRepository,
}

impl DashboardQueryService {
    pub fn new(query: DynDashboardQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl DashboardQueryServiceTrait for DashboardQueryService {
    async fn summary(&self) -> Result<ApiResponse<DashboardResponse>, ServiceError> {
        let summary = self.query.summary().await?;

        Ok(ApiResponse::success(
            "Dados do painel recuperados com sucesso",
            summary.into(),
        ))
    }
}
