use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Decimal,
    pub product_type: String,
    pub unit_value: Option<Decimal>,
    pub stock: Decimal,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}

/// Storefront listing row: product columns plus a comma-joined list of
/// category names produced by the aggregate query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductWithCategories {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Decimal,
    pub product_type: String,
    pub unit_value: Option<Decimal>,
    pub stock: Decimal,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub categories: Option<String>,
}

/// Admin listing row: same shape but carrying category ids.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductWithCategoryIds {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Decimal,
    pub product_type: String,
    pub unit_value: Option<Decimal>,
    pub stock: Decimal,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub category_ids: Option<String>,
}
