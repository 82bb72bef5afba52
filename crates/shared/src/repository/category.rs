use crate::{
    abstract_trait::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use tracing::{error, info};

const DUPLICATE_NAME: &str = "Esta categoria já existe.";

pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list categories: {e:?}");
                RepositoryError::from(e)
            })
    }
}

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create(&self, name: &str) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create category {name}: {e:?}");
            RepositoryError::from_sqlx(e, DUPLICATE_NAME)
        })?;

        info!("✅ Created category ID {} ({name})", category.id);
        Ok(category)
    }

    async fn update(&self, id: i32, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update category {id}: {e:?}");
                RepositoryError::from_sqlx(e, DUPLICATE_NAME)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🔄 Updated category ID {id}");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM product_categories WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete category {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted category ID {id}");
        Ok(())
    }
}
