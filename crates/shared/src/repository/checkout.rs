use crate::{
    abstract_trait::{
        CheckoutStoreTrait, CheckoutTxTrait, DynCouponCommandRepository, DynCouponQueryRepository,
        DynOrderCommandRepository, DynProductCommandRepository, DynProductQueryRepository,
        NewOrder,
    },
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Coupon, Product},
    utils::PricedLine,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use tracing::error;

/// Postgres checkout store: each `begin` opens one database transaction
/// and routes every checkout read and write through it.
pub struct CheckoutStore {
    db: ConnectionPool,
    product_query: DynProductQueryRepository,
    product_command: DynProductCommandRepository,
    order_command: DynOrderCommandRepository,
    coupon_query: DynCouponQueryRepository,
    coupon_command: DynCouponCommandRepository,
}

impl CheckoutStore {
    pub fn new(
        db: ConnectionPool,
        product_query: DynProductQueryRepository,
        product_command: DynProductCommandRepository,
        order_command: DynOrderCommandRepository,
        coupon_query: DynCouponQueryRepository,
        coupon_command: DynCouponCommandRepository,
    ) -> Self {
        Self {
            db,
            product_query,
            product_command,
            order_command,
            coupon_query,
            coupon_command,
        }
    }
}

#[async_trait]
impl CheckoutStoreTrait for CheckoutStore {
    async fn begin(&self) -> Result<Box<dyn CheckoutTxTrait>, RepositoryError> {
        let tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to open checkout transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(Box::new(CheckoutTx {
            tx,
            product_query: self.product_query.clone(),
            product_command: self.product_command.clone(),
            order_command: self.order_command.clone(),
            coupon_query: self.coupon_query.clone(),
            coupon_command: self.coupon_command.clone(),
        }))
    }
}

struct CheckoutTx {
    tx: Transaction<'static, Postgres>,
    product_query: DynProductQueryRepository,
    product_command: DynProductCommandRepository,
    order_command: DynOrderCommandRepository,
    coupon_query: DynCouponQueryRepository,
    coupon_command: DynCouponCommandRepository,
}

#[async_trait]
impl CheckoutTxTrait for CheckoutTx {
    async fn find_product_for_update(
        &mut self,
        id: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        self.product_query.find_for_checkout(&mut *self.tx, id).await
    }

    async fn find_coupon(&mut self, code: &str) -> Result<Option<Coupon>, RepositoryError> {
        self.coupon_query.find_by_code_in_tx(&mut *self.tx, code).await
    }

    async fn insert_order(&mut self, order: &NewOrder) -> Result<i32, RepositoryError> {
        self.order_command.insert_order(&mut *self.tx, order).await
    }

    async fn insert_item(
        &mut self,
        order_id: i32,
        line: &PricedLine,
    ) -> Result<(), RepositoryError> {
        self.order_command
            .insert_item(&mut *self.tx, order_id, line)
            .await
    }

    async fn decrement_stock(
        &mut self,
        product_id: i32,
        quantity: Decimal,
    ) -> Result<(), RepositoryError> {
        self.product_command
            .decrement_stock(&mut *self.tx, product_id, quantity)
            .await
    }

    async fn increment_coupon_usage(&mut self, coupon_id: i32) -> Result<(), RepositoryError> {
        self.coupon_command
            .increment_usage(&mut *self.tx, coupon_id)
            .await
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        self.tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit checkout transaction: {e:?}");
            RepositoryError::from(e)
        })
    }
}
