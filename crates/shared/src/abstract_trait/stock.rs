use crate::{
    domain::{requests::StockAdjustmentRequest, responses::ApiResponse},
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStockCommandRepository = Arc<dyn StockCommandRepositoryTrait + Send + Sync>;
pub type DynStockCommandService = Arc<dyn StockCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait StockCommandRepositoryTrait {
    /// Movement log plus stock increase, one transaction.
    async fn add_stock(&self, req: &StockAdjustmentRequest) -> Result<(), RepositoryError>;
    /// Movement log plus stock decrease, one transaction.
    async fn remove_stock(&self, req: &StockAdjustmentRequest) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait StockCommandServiceTrait {
    async fn add_stock(&self, req: &StockAdjustmentRequest)
    -> Result<ApiResponse<()>, ServiceError>;
    async fn remove_stock(
        &self,
        req: &StockAdjustmentRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
