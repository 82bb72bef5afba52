use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    config::AuthenticatedUser,
    domain::responses::{
        AdminOrderResponse, ApiResponse, OrderDetailResponse, OrderItemResponse, OrderResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_by_user(user_id).await?;
        let responses = orders.into_iter().map(OrderResponse::from).collect();

        Ok(ApiResponse::success(
            "Pedidos recuperados com sucesso",
            responses,
        ))
    }

    async fn find_by_id(
        &self,
        user: AuthenticatedUser,
        id: i32,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Pedido não encontrado".to_string()))?;

        // An order belongs to its buyer; other users get the same 404 as a
        // missing id so ids cannot be enumerated.
        if order.user_id != user.id && !user.is_admin {
            info!("🔒 User {} denied access to order {id}", user.id);
            return Err(ServiceError::NotFound("Pedido não encontrado".to_string()));
        }

        let items = self
            .query
            .find_items(id)
            .await?
            .into_iter()
            .map(OrderItemResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Pedido recuperado com sucesso",
            OrderDetailResponse {
                order: order.into(),
                items,
            },
        ))
    }

    async fn find_all_admin(&self) -> Result<ApiResponse<Vec<AdminOrderResponse>>, ServiceError> {
        let orders = self.query.find_all_with_user().await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self
                .query
                .find_items(order.id)
                .await?
                .into_iter()
                .map(OrderItemResponse::from)
                .collect();
            responses.push(AdminOrderResponse::from_row(order, items));
        }

        Ok(ApiResponse::success(
            "Pedidos recuperados com sucesso",
            responses,
        ))
    }
}
