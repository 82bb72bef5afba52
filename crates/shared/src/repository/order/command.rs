use crate::{
    abstract_trait::{NewOrder, OrderCommandRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    utils::PricedLine,
};
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn insert_order(
        &self,
        conn: &mut PgConnection,
        order: &NewOrder,
    ) -> Result<i32, RepositoryError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO orders (user_id, total, subtotal, delivery_address, payment_method,
                                coupon_code, discount_amount, delivery_fee)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(order.user_id)
        .bind(order.total)
        .bind(order.subtotal)
        .bind(&order.delivery_address)
        .bind(&order.payment_method)
        .bind(&order.coupon_code)
        .bind(order.discount_amount)
        .bind(order.delivery_fee)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order for user {}: {e:?}", order.user_id);
            RepositoryError::from(e)
        })?;

        info!("✅ Created order ID {id} for user {}", order.user_id);
        Ok(id)
    }

    async fn insert_item(
        &self,
        conn: &mut PgConnection,
        order_id: i32,
        line: &PricedLine,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, price,
                                     product_name, product_photo)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(order_id)
        .bind(line.product_id)
        .bind(line.quantity)
        .bind(line.unit_price)
        .bind(&line.product_name)
        .bind(&line.product_photo)
        .execute(conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to insert item of product {} for order {order_id}: {e:?}",
                line.product_id
            );
            RepositoryError::from(e)
        })?;

        Ok(())
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update status of order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🔄 Updated order ID {id} to status {status}");
        Ok(())
    }
}
