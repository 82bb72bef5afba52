use crate::{
    abstract_trait::CouponCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCouponRequest, UpdateCouponRequest},
    errors::RepositoryError,
    utils::parse_expiration_datetime,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgConnection;
use tracing::{error, info};

const DUPLICATE_CODE: &str = "Este código de cupom já existe.";

fn parse_expiry(expires_at: Option<&String>) -> Option<NaiveDateTime> {
    expires_at.and_then(|raw| parse_expiration_datetime(raw).ok())
}

pub struct CouponCommandRepository {
    db: ConnectionPool,
}

impl CouponCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CouponCommandRepositoryTrait for CouponCommandRepository {
    async fn create(&self, req: &CreateCouponRequest) -> Result<i32, RepositoryError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO coupons (code, discount_type, discount_value, expires_at, usage_limit)
            VALUES (UPPER($1), $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&req.code)
        .bind(&req.discount_type)
        .bind(req.discount_value)
        .bind(parse_expiry(req.expires_at.as_ref()))
        .bind(req.usage_limit)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create coupon {}: {e:?}", req.code);
            RepositoryError::from_sqlx(e, DUPLICATE_CODE)
        })?;

        info!("✅ Created coupon ID {id} ({})", req.code);
        Ok(id)
    }

    async fn update(&self, id: i32, req: &UpdateCouponRequest) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE coupons
            SET code = UPPER($1),
                discount_type = $2,
                discount_value = $3,
                expires_at = $4,
                usage_limit = $5,
                is_active = $6
            WHERE id = $7
            "#,
        )
        .bind(&req.code)
        .bind(&req.discount_type)
        .bind(req.discount_value)
        .bind(parse_expiry(req.expires_at.as_ref()))
        .bind(req.usage_limit)
        .bind(req.is_active)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update coupon {id}: {e:?}");
            RepositoryError::from_sqlx(e, DUPLICATE_CODE)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🔄 Updated coupon ID {id}");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM coupons WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete coupon {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted coupon ID {id}");
        Ok(())
    }

    async fn increment_usage(
        &self,
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE coupons SET times_used = times_used + 1 WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to increment usage of coupon {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
