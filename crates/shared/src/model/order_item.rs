use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Line item with the unit price and product snapshot captured at purchase
/// time. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub price: Decimal,
    pub product_name: Option<String>,
    pub product_photo: Option<String>,
}
