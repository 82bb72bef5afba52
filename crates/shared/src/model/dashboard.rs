use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TopSellingProduct {
    pub name: String,
    pub total_sold: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecentOrder {
    pub id: i32,
    pub user_name: String,
    pub total: Decimal,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_revenue: Decimal,
    pub total_orders: i64,
    pub new_users: i64,
    pub pending_orders: i64,
    pub top_selling_products: Vec<TopSellingProduct>,
    pub recent_orders: Vec<RecentOrder>,
}
