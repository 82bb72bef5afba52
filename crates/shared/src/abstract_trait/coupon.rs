use crate::{
    domain::{
        requests::{ApplyCouponRequest, CreateCouponRequest, UpdateCouponRequest},
        responses::{ApiResponse, AppliedCouponResponse, CouponResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Coupon,
};
use async_trait::async_trait;
use sqlx::PgConnection;
use std::sync::Arc;

pub type DynCouponQueryRepository = Arc<dyn CouponQueryRepositoryTrait + Send + Sync>;
pub type DynCouponCommandRepository = Arc<dyn CouponCommandRepositoryTrait + Send + Sync>;
pub type DynCouponQueryService = Arc<dyn CouponQueryServiceTrait + Send + Sync>;
pub type DynCouponCommandService = Arc<dyn CouponCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CouponQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Coupon>, RepositoryError>;
    /// Case-insensitive lookup used by the discount preview.
    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, RepositoryError>;
    /// Same lookup, executed inside the checkout transaction.
    async fn find_by_code_in_tx(
        &self,
        conn: &mut PgConnection,
        code: &str,
    ) -> Result<Option<Coupon>, RepositoryError>;
}

#[async_trait]
pub trait CouponCommandRepositoryTrait {
    async fn create(&self, req: &CreateCouponRequest) -> Result<i32, RepositoryError>;
    async fn update(&self, id: i32, req: &UpdateCouponRequest) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// Usage bump executed inside the checkout transaction.
    async fn increment_usage(&self, conn: &mut PgConnection, id: i32)
    -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CouponQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CouponResponse>>, ServiceError>;
    async fn apply(&self, req: &ApplyCouponRequest) -> Result<AppliedCouponResponse, ServiceError>;
}

#[async_trait]
pub trait CouponCommandServiceTrait {
    async fn create_coupon(
        &self,
        req: &CreateCouponRequest,
    ) -> Result<ApiResponse<i32>, ServiceError>;
    async fn update_coupon(
        &self,
        id: i32,
        req: &UpdateCouponRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn delete_coupon(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
