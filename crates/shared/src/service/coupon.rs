use crate::{
    abstract_trait::{
        CouponCommandServiceTrait, CouponQueryServiceTrait, DynCouponCommandRepository,
        DynCouponQueryRepository,
    },
    domain::{
        requests::{ApplyCouponRequest, CreateCouponRequest, UpdateCouponRequest},
        responses::{ApiResponse, AppliedCouponResponse, CouponResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::check_request,
    utils::{round_money, validate_coupon},
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

pub struct CouponQueryService {
    query: DynCouponQueryRepository,
}

impl CouponQueryService {
    pub fn new(query: DynCouponQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CouponQueryServiceTrait for CouponQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CouponResponse>>, ServiceError> {
        let coupons = self.query.find_all().await?;
        let responses = coupons.into_iter().map(CouponResponse::from).collect();

        Ok(ApiResponse::success(
            "Cupons recuperados com sucesso",
            responses,
        ))
    }

    /// Discount preview against a client-reported total. The checkout
    /// re-validates against the server-side subtotal, so this result is
    /// informational only.
    async fn apply(&self, req: &ApplyCouponRequest) -> Result<AppliedCouponResponse, ServiceError> {
        check_request(req)?;

        let coupon = self.query.find_by_code(&req.coupon_code).await?;
        let discount = validate_coupon(coupon.as_ref(), req.total, Utc::now().naive_utc())
            .map_err(|e| {
                info!("🏷️ Coupon {} rejected on preview: {e}", req.coupon_code);
                ServiceError::InvalidCoupon(e.to_string())
            })?;

        Ok(AppliedCouponResponse {
            message: "Cupom aplicado com sucesso!".to_string(),
            discount_amount: discount.discount_amount,
            new_total: round_money(req.total - discount.discount_amount),
        })
    }
}

pub struct CouponCommandService {
    command: DynCouponCommandRepository,
}

impl CouponCommandService {
    pub fn new(command: DynCouponCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CouponCommandServiceTrait for CouponCommandService {
    async fn create_coupon(
        &self,
        req: &CreateCouponRequest,
    ) -> Result<ApiResponse<i32>, ServiceError> {
        check_request(req)?;

        let id = self.command.create(req).await.map_err(|e| match e {
            RepositoryError::UniqueViolation(msg) => ServiceError::AlreadyExists(msg),
            other => {
                error!("❌ Failed to create coupon {}: {other:?}", req.code);
                ServiceError::Repo(other)
            }
        })?;

        Ok(ApiResponse::success("Cupom criado com sucesso", id))
    }

    async fn update_coupon(
        &self,
        id: i32,
        req: &UpdateCouponRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        check_request(req)?;

        self.command.update(id, req).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Cupom não encontrado".to_string()),
            RepositoryError::UniqueViolation(msg) => ServiceError::AlreadyExists(msg),
            other => ServiceError::Repo(other),
        })?;

        Ok(ApiResponse::success("Cupom atualizado com sucesso", ()))
    }

    async fn delete_coupon(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Cupom não encontrado".to_string()),
            other => ServiceError::Repo(other),
        })?;

        Ok(ApiResponse::success("Cupom excluído com sucesso", ()))
    }
}
