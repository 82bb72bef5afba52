use crate::{
    abstract_trait::NewOrder,
    errors::RepositoryError,
    model::{Coupon, Product},
    utils::PricedLine,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynCheckoutStore = Arc<dyn CheckoutStoreTrait + Send + Sync>;

/// Opens checkout transactions. The orchestration in the order service
/// only sees this trait, so it can run against any transactional store.
#[async_trait]
pub trait CheckoutStoreTrait {
    async fn begin(&self) -> Result<Box<dyn CheckoutTxTrait>, RepositoryError>;
}

/// One open checkout transaction. Every read and write goes through the
/// same handle; dropping it without `commit` rolls back all of them.
#[async_trait]
pub trait CheckoutTxTrait: Send {
    /// Authoritative product read, locked for the rest of the transaction.
    async fn find_product_for_update(
        &mut self,
        id: i32,
    ) -> Result<Option<Product>, RepositoryError>;

    async fn find_coupon(&mut self, code: &str) -> Result<Option<Coupon>, RepositoryError>;

    async fn insert_order(&mut self, order: &NewOrder) -> Result<i32, RepositoryError>;

    async fn insert_item(
        &mut self,
        order_id: i32,
        line: &PricedLine,
    ) -> Result<(), RepositoryError>;

    async fn decrement_stock(
        &mut self,
        product_id: i32,
        quantity: Decimal,
    ) -> Result<(), RepositoryError>;

    async fn increment_coupon_usage(&mut self, coupon_id: i32) -> Result<(), RepositoryError>;

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;
}
