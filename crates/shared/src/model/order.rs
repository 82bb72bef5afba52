use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub total: Decimal,
    pub subtotal: Decimal,
    pub status: String,
    pub payment_method: Option<String>,
    pub coupon_code: Option<String>,
    pub discount_amount: Decimal,
    pub payment_status: String,
    pub delivery_address: Option<String>,
    pub delivery_status: String,
    pub delivery_fee: Decimal,
    pub created_at: Option<NaiveDateTime>,
}

/// Admin listing row: order columns joined with the buyer's identity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderWithUser {
    pub id: i32,
    pub user_id: i32,
    pub total: Decimal,
    pub subtotal: Decimal,
    pub status: String,
    pub payment_method: Option<String>,
    pub coupon_code: Option<String>,
    pub discount_amount: Decimal,
    pub payment_status: String,
    pub delivery_address: Option<String>,
    pub delivery_status: String,
    pub delivery_fee: Decimal,
    pub created_at: Option<NaiveDateTime>,
    pub user_name: String,
    pub user_email: String,
}
