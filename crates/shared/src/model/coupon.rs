use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DISCOUNT_PERCENTAGE: &str = "percentage";
pub const DISCOUNT_FIXED: &str = "fixed";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Coupon {
    pub id: i32,
    pub code: String,
    pub discount_type: String,
    pub discount_value: Decimal,
    pub expires_at: Option<NaiveDateTime>,
    pub usage_limit: Option<i32>,
    pub times_used: i32,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}
