use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Client-side discount preview: same validator as the checkout path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApplyCouponRequest {
    #[validate(length(min = 1, message = "Código do cupom e total do carrinho são obrigatórios"))]
    #[schema(example = "SAVE10")]
    pub coupon_code: String,

    #[schema(example = 100.0)]
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCouponRequest {
    #[validate(length(min = 1, message = "Código, tipo de desconto e valor são obrigatórios."))]
    #[schema(example = "SAVE10")]
    pub code: String,

    #[validate(length(min = 1, message = "Código, tipo de desconto e valor são obrigatórios."))]
    #[schema(example = "percentage")]
    pub discount_type: String,

    #[schema(example = 10.0)]
    pub discount_value: Decimal,

    /// "YYYY-MM-DD HH:MM:SS"; absent means the coupon never expires.
    pub expires_at: Option<String>,

    pub usage_limit: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCouponRequest {
    #[validate(length(min = 1, message = "Código, tipo de desconto e valor são obrigatórios."))]
    pub code: String,

    #[validate(length(min = 1, message = "Código, tipo de desconto e valor são obrigatórios."))]
    pub discount_type: String,

    pub discount_value: Decimal,

    pub expires_at: Option<String>,

    pub usage_limit: Option<i32>,

    pub is_active: bool,
}
