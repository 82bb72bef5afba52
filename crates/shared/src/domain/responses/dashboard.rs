use crate::model::{DashboardSummary, RecentOrder, TopSellingProduct};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TopSellingProductResponse {
    pub name: String,
    pub total_sold: Decimal,
}

impl From<TopSellingProduct> for TopSellingProductResponse {
    fn from(value: TopSellingProduct) -> Self {
        TopSellingProductResponse {
            name: value.name,
            total_sold: value.total_sold.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RecentOrderResponse {
    pub id: i32,
    pub user_name: String,
    pub total: Decimal,
    pub status: String,
    pub created_at: Option<String>,
}

impl From<RecentOrder> for RecentOrderResponse {
    fn from(value: RecentOrder) -> Self {
        RecentOrderResponse {
            id: value.id,
            user_name: value.user_name,
            total: value.total,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

/// Aggregate cards and tables of the admin panel landing page. Field names
/// stay camelCase because the panel consumes them as-is.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_revenue: Decimal,
    pub total_orders: i64,
    pub new_users: i64,
    pub pending_orders: i64,
    pub top_selling_products: Vec<TopSellingProductResponse>,
    pub recent_orders: Vec<RecentOrderResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(value: DashboardSummary) -> Self {
        DashboardResponse {
            total_revenue: value.total_revenue,
            total_orders: value.total_orders,
            new_users: value.new_users,
            pending_orders: value.pending_orders,
            top_selling_products: value
                .top_selling_products
                .into_iter()
                .map(Into::into)
                .collect(),
            recent_orders: value.recent_orders.into_iter().map(Into::into).collect(),
        }
    }
}
