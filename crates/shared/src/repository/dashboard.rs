use crate::{
    abstract_trait::DashboardQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{DashboardSummary, RecentOrder, TopSellingProduct},
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::error;

pub struct DashboardQueryRepository {
    db: ConnectionPool,
}

impl DashboardQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DashboardQueryRepositoryTrait for DashboardQueryRepository {
    async fn summary(&self) -> Result<DashboardSummary, RepositoryError> {
        let log = |e: sqlx::Error| {
            error!("❌ Failed to load dashboard data: {e:?}");
            RepositoryError::from(e)
        };

        let (total_revenue,): (Option<Decimal>,) = sqlx::query_as(
            "SELECT SUM(total) FROM orders WHERE payment_status = 'approved'",
        )
        .fetch_one(&self.db)
        .await
        .map_err(log)?;

        let (total_orders,): (i64,) = sqlx::query_as("SELECT COUNT(id) FROM orders")
            .fetch_one(&self.db)
            .await
            .map_err(log)?;

        let (new_users,): (i64,) = sqlx::query_as(
            "SELECT COUNT(id) FROM users WHERE created_at >= NOW() - INTERVAL '30 days'",
        )
        .fetch_one(&self.db)
        .await
        .map_err(log)?;

        let (pending_orders,): (i64,) =
            sqlx::query_as("SELECT COUNT(id) FROM orders WHERE status = 'pending'")
                .fetch_one(&self.db)
                .await
                .map_err(log)?;

        let top_selling_products = sqlx::query_as::<_, TopSellingProduct>(
            r#"
            SELECT p.name, SUM(oi.quantity) AS total_sold
            FROM order_items oi
            JOIN products p ON oi.product_id = p.id
            GROUP BY p.name
            ORDER BY total_sold DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(log)?;

        let recent_orders = sqlx::query_as::<_, RecentOrder>(
            r#"
            SELECT o.id, u.name AS user_name, o.total, o.status, o.created_at
            FROM orders o
            JOIN users u ON o.user_id = u.id
            ORDER BY o.created_at DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(log)?;

        Ok(DashboardSummary {
            total_revenue: total_revenue.unwrap_or_default(),
            total_orders,
            new_users,
            pending_orders,
            top_selling_products,
            recent_orders,
        })
    }
}
