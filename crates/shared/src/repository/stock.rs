use crate::{
    abstract_trait::StockCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::StockAdjustmentRequest,
    errors::RepositoryError,
    model::{MOVEMENT_ADD, MOVEMENT_REMOVE},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct StockCommandRepository {
    db: ConnectionPool,
}

impl StockCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn adjust(
        &self,
        req: &StockAdjustmentRequest,
        movement_type: &str,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query(
            "INSERT INTO stock_movements (product_id, quantity, type, reason) VALUES ($1, $2, $3, $4)",
        )
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(movement_type)
        .bind(&req.reason)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to record {movement_type} movement for product {}: {e:?}",
                req.product_id
            );
            RepositoryError::from(e)
        })?;

        let delta = if movement_type == MOVEMENT_ADD {
            req.quantity
        } else {
            -req.quantity
        };

        sqlx::query("UPDATE products SET stock = stock + $1 WHERE id = $2")
            .bind(delta)
            .bind(req.product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to adjust stock of product {}: {e:?}", req.product_id);
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Stock {movement_type} of {} for product {}",
            req.quantity, req.product_id
        );
        Ok(())
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for StockCommandRepository {
    async fn add_stock(&self, req: &StockAdjustmentRequest) -> Result<(), RepositoryError> {
        self.adjust(req, MOVEMENT_ADD).await
    }

    async fn remove_stock(&self, req: &StockAdjustmentRequest) -> Result<(), RepositoryError> {
        self.adjust(req, MOVEMENT_REMOVE).await
    }
}
