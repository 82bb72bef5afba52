use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{
            AdminOrderResponse, ApiResponse, CreateOrderResponse, OrderDetailResponse,
            OrderResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem, OrderWithUser},
    utils::PricedLine,
};
use crate::config::AuthenticatedUser;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

/// Monetary fields of an order as computed by the checkout, ready to
/// persist.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub total: Decimal,
    pub subtotal: Decimal,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    pub coupon_code: Option<String>,
    pub discount_amount: Decimal,
    pub delivery_fee: Decimal,
}

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
    async fn find_all_with_user(&self) -> Result<Vec<OrderWithUser>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order row inside the checkout transaction and returns
    /// its id.
    async fn insert_order(
        &self,
        conn: &mut PgConnection,
        order: &NewOrder,
    ) -> Result<i32, RepositoryError>;
    /// Inserts one priced line, carrying the captured unit price and the
    /// product snapshot.
    async fn insert_item(
        &self,
        conn: &mut PgConnection,
        order_id: i32,
        line: &PricedLine,
    ) -> Result<(), RepositoryError>;
    async fn update_status(&self, id: i32, status: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user: AuthenticatedUser,
        id: i32,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;
    async fn find_all_admin(
        &self,
    ) -> Result<ApiResponse<Vec<AdminOrderResponse>>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ServiceError>;
    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
