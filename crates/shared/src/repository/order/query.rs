use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderItem, OrderWithUser},
};
use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
        sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to list orders of user {user_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        // Name and photo come from the snapshot taken at purchase time, so
        // historical orders render even after catalog edits.
        sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, quantity, price, product_name, product_photo
            FROM order_items
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items of order {order_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_all_with_user(&self) -> Result<Vec<OrderWithUser>, RepositoryError> {
        sqlx::query_as::<_, OrderWithUser>(
            r#"
            SELECT o.*, u.name AS user_name, u.email AS user_email
            FROM orders o
            JOIN users u ON o.user_id = u.id
            ORDER BY o.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to list orders for admin: {e:?}");
            RepositoryError::from(e)
        })
    }
}
