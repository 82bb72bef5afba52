use crate::model::Coupon;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CouponResponse {
    pub id: i32,
    pub code: String,
    pub discount_type: String,
    pub discount_value: Decimal,
    pub expires_at: Option<String>,
    pub usage_limit: Option<i32>,
    pub times_used: i32,
    pub is_active: bool,
    pub created_at: Option<String>,
}

impl From<Coupon> for CouponResponse {
    fn from(value: Coupon) -> Self {
        CouponResponse {
            id: value.id,
            code: value.code,
            discount_type: value.discount_type,
            discount_value: value.discount_value,
            expires_at: value.expires_at.map(|dt| dt.to_string()),
            usage_limit: value.usage_limit,
            times_used: value.times_used,
            is_active: value.is_active,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

/// Discount preview returned by the public apply endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AppliedCouponResponse {
    #[schema(example = "Cupom aplicado com sucesso!")]
    pub message: String,
    #[schema(example = 10.0)]
    pub discount_amount: Decimal,
    #[schema(example = 90.0)]
    pub new_total: Decimal,
}
