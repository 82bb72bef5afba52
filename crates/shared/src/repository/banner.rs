use crate::{
    abstract_trait::{BannerCommandRepositoryTrait, BannerQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::CreateBannerRequest,
    errors::RepositoryError,
    model::{BANNER_CELULAR, BANNER_NORMAL, Banner},
};
use async_trait::async_trait;
use tracing::{error, info};

const BANNER_COLUMNS: &str = "id, title, photo, is_active, type AS banner_type, created_at";

pub struct BannerQueryRepository {
    db: ConnectionPool,
}

impl BannerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BannerQueryRepositoryTrait for BannerQueryRepository {
    async fn find_active(&self, banner_type: &str) -> Result<Vec<Banner>, RepositoryError> {
        let sql = format!(
            "SELECT {BANNER_COLUMNS} FROM banners WHERE is_active = TRUE AND type = $1 ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Banner>(&sql)
            .bind(banner_type)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list active banners: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_all(&self) -> Result<Vec<Banner>, RepositoryError> {
        let sql = format!("SELECT {BANNER_COLUMNS} FROM banners ORDER BY created_at DESC");

        sqlx::query_as::<_, Banner>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list banners: {e:?}");
                RepositoryError::from(e)
            })
    }
}

pub struct BannerCommandRepository {
    db: ConnectionPool,
}

impl BannerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BannerCommandRepositoryTrait for BannerCommandRepository {
    async fn create_pair(&self, req: &CreateBannerRequest) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        for (photo, banner_type) in [
            (&req.photo_normal, BANNER_NORMAL),
            (&req.photo_celular, BANNER_CELULAR),
        ] {
            sqlx::query("INSERT INTO banners (title, photo, type) VALUES ($1, $2, $3)")
                .bind(&req.title)
                .bind(photo)
                .bind(banner_type)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!("❌ Failed to create {banner_type} banner {}: {e:?}", req.title);
                    RepositoryError::from(e)
                })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created banner pair titled {}", req.title);
        Ok(())
    }

    async fn toggle_active(&self, id: i32) -> Result<bool, RepositoryError> {
        let row: Option<(bool,)> = sqlx::query_as(
            "UPDATE banners SET is_active = NOT is_active WHERE id = $1 RETURNING is_active",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to toggle banner {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        row.map(|(is_active,)| is_active)
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete banner {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted banner ID {id}");
        Ok(())
    }
}
