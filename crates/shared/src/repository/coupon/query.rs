use crate::{
    abstract_trait::CouponQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Coupon,
};
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::error;

// Codes are stored upper-cased; matching against UPPER($1) keeps the lookup
// case-insensitive for clients.
const FIND_BY_CODE: &str = "SELECT * FROM coupons WHERE code = UPPER($1)";

pub struct CouponQueryRepository {
    db: ConnectionPool,
}

impl CouponQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CouponQueryRepositoryTrait for CouponQueryRepository {
    async fn find_all(&self) -> Result<Vec<Coupon>, RepositoryError> {
        sqlx::query_as::<_, Coupon>("SELECT * FROM coupons ORDER BY created_at DESC")
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list coupons: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, RepositoryError> {
        sqlx::query_as::<_, Coupon>(FIND_BY_CODE)
            .bind(code)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch coupon {code}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_code_in_tx(
        &self,
        conn: &mut PgConnection,
        code: &str,
    ) -> Result<Option<Coupon>, RepositoryError> {
        sqlx::query_as::<_, Coupon>(FIND_BY_CODE)
            .bind(code)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch coupon {code} in checkout: {e:?}");
                RepositoryError::from(e)
            })
    }
}
