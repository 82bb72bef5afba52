use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Product, ProductWithCategories, ProductWithCategoryIds},
};
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::error;

const PRODUCT_COLUMNS: &str =
    "id, name, description, photo, price, type AS product_type, unit_value, stock, is_active, created_at";

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_active(
        &self,
        category_id: Option<i32>,
    ) -> Result<Vec<ProductWithCategories>, RepositoryError> {
        let base = r#"
            SELECT p.id, p.name, p.description, p.photo, p.price,
                   p.type AS product_type, p.unit_value, p.stock, p.is_active,
                   p.created_at, STRING_AGG(c.name, ',') AS categories
            FROM products p
            LEFT JOIN product_categories pc ON p.id = pc.product_id
            LEFT JOIN categories c ON pc.category_id = c.id
            WHERE p.is_active = TRUE
        "#;

        let rows = match category_id {
            Some(category_id) => {
                let sql = format!(
                    "{base} AND p.id IN (SELECT product_id FROM product_categories WHERE category_id = $1) GROUP BY p.id"
                );
                sqlx::query_as::<_, ProductWithCategories>(&sql)
                    .bind(category_id)
                    .fetch_all(&self.db)
                    .await
            }
            None => {
                let sql = format!("{base} GROUP BY p.id");
                sqlx::query_as::<_, ProductWithCategories>(&sql)
                    .fetch_all(&self.db)
                    .await
            }
        };

        rows.map_err(|e| {
            error!("❌ Failed to list active products: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_active_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE");

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_all_admin(&self) -> Result<Vec<ProductWithCategoryIds>, RepositoryError> {
        sqlx::query_as::<_, ProductWithCategoryIds>(
            r#"
            SELECT p.id, p.name, p.description, p.photo, p.price,
                   p.type AS product_type, p.unit_value, p.stock, p.is_active,
                   p.created_at, STRING_AGG(c.id::TEXT, ',') AS category_ids
            FROM products p
            LEFT JOIN product_categories pc ON p.id = pc.product_id
            LEFT JOIN categories c ON pc.category_id = c.id
            GROUP BY p.id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to list products for admin: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_for_checkout(
        &self,
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE");

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id} for checkout: {e:?}");
                RepositoryError::from(e)
            })
    }
}
