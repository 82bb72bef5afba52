use crate::{
    abstract_trait::{
        DynProductQueryRepository, DynStockCommandRepository, StockCommandServiceTrait,
    },
    domain::{requests::StockAdjustmentRequest, responses::ApiResponse},
    errors::ServiceError,
    service::check_request,
};
use async_trait::async_trait;
use tracing::info;

pub struct StockCommandService {
    product_query: DynProductQueryRepository,
    command: DynStockCommandRepository,
}

impl StockCommandService {
    pub fn new(product_query: DynProductQueryRepository, command: DynStockCommandRepository) -> Self {
        Self {
            product_query,
            command,
        }
    }
}

#[async_trait]
impl StockCommandServiceTrait for StockCommandService {
    async fn add_stock(
        &self,
        req: &StockAdjustmentRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        check_request(req)?;

        self.product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Produto não encontrado".to_string()))?;

        self.command.add_stock(req).await?;

        info!(
            "📦 Stock of product {} increased by {}",
            req.product_id, req.quantity
        );

        Ok(ApiResponse::success("Estoque adicionado com sucesso", ()))
    }

    async fn remove_stock(
        &self,
        req: &StockAdjustmentRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        check_request(req)?;

        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Produto não encontrado".to_string()))?;

        if product.stock < req.quantity {
            return Err(ServiceError::InsufficientStock(
                "Estoque insuficiente".to_string(),
            ));
        }

        self.command.remove_stock(req).await?;

        info!(
            "📦 Stock of product {} decreased by {}",
            req.product_id, req.quantity
        );

        Ok(ApiResponse::success("Estoque removido com sucesso", ()))
    }
}
