use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_with_categories(
        &self,
        req: &CreateProductRequest,
    ) -> Result<i32, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO products (name, description, photo, price, type, unit_value, stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.photo)
        .bind(req.price)
        .bind(&req.product_type)
        .bind(req.unit_value)
        .bind(req.stock)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product {}: {e:?}", req.name);
            RepositoryError::from(e)
        })?;

        if let Some(category_ids) = &req.category_ids {
            for category_id in category_ids {
                sqlx::query(
                    "INSERT INTO product_categories (product_id, category_id) VALUES ($1, $2)",
                )
                .bind(id)
                .bind(category_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!("❌ Failed to link product {id} to category {category_id}: {e:?}");
                    RepositoryError::from(e)
                })?;
            }
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created product ID {id}");
        Ok(id)
    }

    async fn update_with_categories(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1,
                description = $2,
                photo = $3,
                price = $4,
                type = $5,
                unit_value = $6,
                stock = $7,
                is_active = $8
            WHERE id = $9
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.photo)
        .bind(req.price)
        .bind(&req.product_type)
        .bind(req.unit_value)
        .bind(req.stock)
        .bind(req.is_active)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        // Category links are rewritten wholesale on every update.
        sqlx::query("DELETE FROM product_categories WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        if let Some(category_ids) = &req.category_ids {
            for category_id in category_ids {
                sqlx::query(
                    "INSERT INTO product_categories (product_id, category_id) VALUES ($1, $2)",
                )
                .bind(id)
                .bind(category_id)
                .execute(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;
            }
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated product ID {id}");
        Ok(())
    }

    async fn toggle_active(&self, id: i32) -> Result<bool, RepositoryError> {
        let row: Option<(bool,)> = sqlx::query_as(
            "UPDATE products SET is_active = NOT is_active WHERE id = $1 RETURNING is_active",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to toggle product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        row.map(|(is_active,)| is_active)
            .ok_or(RepositoryError::NotFound)
    }

    async fn decrement_stock(
        &self,
        conn: &mut PgConnection,
        id: i32,
        quantity: Decimal,
    ) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE products SET stock = stock - $1 WHERE id = $2")
            .bind(quantity)
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to decrement stock of product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
