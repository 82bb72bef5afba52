use crate::{
    abstract_trait::{
        DynCheckoutStore, DynOrderCommandRepository, NewOrder, OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, CreateOrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::check_request,
    utils::{AppliedDiscount, PricingError, order_total, price_cart, validate_coupon},
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{error, info};

/// Runs the checkout. Everything between the first product read and the
/// final stock decrement happens inside one checkout transaction; any
/// failure drops the transaction and rolls back every write.
pub struct OrderCommandService {
    store: DynCheckoutStore,
    order_command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(store: DynCheckoutStore, order_command: DynOrderCommandRepository) -> Self {
        Self {
            store,
            order_command,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ServiceError> {
        check_request(req)?;

        if req.items.is_empty() {
            return Err(ServiceError::EmptyCart);
        }

        info!(
            "🔄 Starting checkout for user {user_id} with {} item(s)",
            req.items.len()
        );

        let mut tx = self.store.begin().await?;

        // Authoritative reads: prices and stock come from inside the
        // transaction, never from the request body.
        let mut products = Vec::with_capacity(req.items.len());
        for item in &req.items {
            let product = tx.find_product_for_update(item.product_id).await?;
            products.push(product);
        }

        let cart = price_cart(&req.items, &products).map_err(|e| {
            error!("❌ Checkout aborted for user {user_id}: {e}");
            match e {
                PricingError::ProductUnavailable { .. } => {
                    ServiceError::ProductUnavailable(e.to_string())
                }
                PricingError::InsufficientStock { .. } => {
                    ServiceError::InsufficientStock(e.to_string())
                }
            }
        })?;

        // A present-but-blank code still goes through validation and fails
        // as an unknown coupon; only an absent or empty field skips it.
        let applied: Option<AppliedDiscount> = match req
            .coupon_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(str::trim)
        {
            Some(code) => {
                let coupon = tx.find_coupon(code).await?;
                let discount =
                    validate_coupon(coupon.as_ref(), cart.subtotal, Utc::now().naive_utc())
                        .map_err(|e| {
                            error!("❌ Coupon {code:?} rejected for user {user_id}: {e}");
                            ServiceError::InvalidCoupon(e.to_string())
                        })?;
                Some(discount)
            }
            None => None,
        };

        let discount_amount = applied
            .as_ref()
            .map(|a| a.discount_amount)
            .unwrap_or(Decimal::ZERO);
        let delivery_fee = req.delivery_fee.unwrap_or(Decimal::ZERO);
        let total = order_total(cart.subtotal, delivery_fee, discount_amount);

        let new_order = NewOrder {
            user_id,
            total,
            subtotal: cart.subtotal,
            delivery_address: req.delivery_address.clone(),
            payment_method: req.payment_method.clone(),
            coupon_code: applied.as_ref().map(|a| a.code.clone()),
            discount_amount,
            delivery_fee,
        };

        let order_id = tx.insert_order(&new_order).await?;

        for line in &cart.lines {
            tx.insert_item(order_id, line).await?;
            tx.decrement_stock(line.product_id, line.quantity).await?;
        }

        if let Some(discount) = &applied {
            tx.increment_coupon_usage(discount.coupon_id).await?;
        }

        // Writes rolled back above surface as 400s; a commit that fails
        // leaves the store's consistency unconfirmed and is the one case
        // reported as a server error.
        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit checkout for user {user_id}: {e:?}");
            ServiceError::Internal("Erro interno do servidor".to_string())
        })?;

        info!("✅ Order {order_id} created for user {user_id}, total {total}");

        Ok(CreateOrderResponse {
            message: "Pedido criado com sucesso".to_string(),
            order_id,
            total,
        })
    }

    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        check_request(req)?;

        self.order_command
            .update_status(id, &req.status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::NotFound("Pedido não encontrado".to_string())
                }
                other => ServiceError::Repo(other),
            })?;

        Ok(ApiResponse::success(
            "Status do pedido atualizado com sucesso",
            (),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{CheckoutStoreTrait, CheckoutTxTrait, OrderCommandRepositoryTrait},
        domain::requests::CartItemRequest,
        model::{Coupon, DISCOUNT_PERCENTAGE, Product},
        utils::PricedLine,
    };
    use rust_decimal_macros::dec;
    use sqlx::PgConnection;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct StoreLog {
        orders: Vec<NewOrder>,
        items: Vec<(i32, PricedLine)>,
        decrements: Vec<(i32, Decimal)>,
        usage_bumps: Vec<i32>,
        committed: bool,
    }

    #[derive(Clone, Copy, Default)]
    struct Faults {
        insert_order: bool,
        commit: bool,
    }

    struct InMemoryStore {
        products: Vec<Product>,
        coupon: Option<Coupon>,
        faults: Faults,
        log: Arc<Mutex<StoreLog>>,
    }

    struct InMemoryTx {
        products: Vec<Product>,
        coupon: Option<Coupon>,
        faults: Faults,
        log: Arc<Mutex<StoreLog>>,
    }

    fn store_failure() -> RepositoryError {
        RepositoryError::Sqlx(sqlx::Error::PoolClosed)
    }

    #[async_trait]
    impl CheckoutStoreTrait for InMemoryStore {
        async fn begin(&self) -> Result<Box<dyn CheckoutTxTrait>, RepositoryError> {
            Ok(Box::new(InMemoryTx {
                products: self.products.clone(),
                coupon: self.coupon.clone(),
                faults: self.faults,
                log: self.log.clone(),
            }))
        }
    }

    #[async_trait]
    impl CheckoutTxTrait for InMemoryTx {
        async fn find_product_for_update(
            &mut self,
            id: i32,
        ) -> Result<Option<Product>, RepositoryError> {
            Ok(self
                .products
                .iter()
                .find(|p| p.id == id && p.is_active)
                .cloned())
        }

        async fn find_coupon(&mut self, code: &str) -> Result<Option<Coupon>, RepositoryError> {
            Ok(self
                .coupon
                .clone()
                .filter(|c| c.code.eq_ignore_ascii_case(code)))
        }

        async fn insert_order(&mut self, order: &NewOrder) -> Result<i32, RepositoryError> {
            if self.faults.insert_order {
                return Err(store_failure());
            }
            let mut log = self.log.lock().unwrap();
            log.orders.push(order.clone());
            Ok(log.orders.len() as i32)
        }

        async fn insert_item(
            &mut self,
            order_id: i32,
            line: &PricedLine,
        ) -> Result<(), RepositoryError> {
            self.log.lock().unwrap().items.push((order_id, line.clone()));
            Ok(())
        }

        async fn decrement_stock(
            &mut self,
            product_id: i32,
            quantity: Decimal,
        ) -> Result<(), RepositoryError> {
            self.log
                .lock()
                .unwrap()
                .decrements
                .push((product_id, quantity));
            Ok(())
        }

        async fn increment_coupon_usage(&mut self, coupon_id: i32) -> Result<(), RepositoryError> {
            self.log.lock().unwrap().usage_bumps.push(coupon_id);
            Ok(())
        }

        async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
            if self.faults.commit {
                return Err(store_failure());
            }
            self.log.lock().unwrap().committed = true;
            Ok(())
        }
    }

    struct NoOrders;

    #[async_trait]
    impl OrderCommandRepositoryTrait for NoOrders {
        async fn insert_order(
            &self,
            _conn: &mut PgConnection,
            _order: &NewOrder,
        ) -> Result<i32, RepositoryError> {
            unreachable!("checkout writes go through the transaction")
        }

        async fn insert_item(
            &self,
            _conn: &mut PgConnection,
            _order_id: i32,
            _line: &PricedLine,
        ) -> Result<(), RepositoryError> {
            unreachable!("checkout writes go through the transaction")
        }

        async fn update_status(&self, _id: i32, _status: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    fn product(id: i32, price: Decimal, stock: Decimal) -> Product {
        Product {
            id,
            name: format!("Produto {id}"),
            description: None,
            photo: None,
            price,
            product_type: "package".to_string(),
            unit_value: None,
            stock,
            is_active: true,
            created_at: None,
        }
    }

    fn ten_percent_coupon() -> Coupon {
        Coupon {
            id: 42,
            code: "SAVE10".to_string(),
            discount_type: DISCOUNT_PERCENTAGE.to_string(),
            discount_value: dec!(10),
            expires_at: None,
            usage_limit: None,
            times_used: 0,
            is_active: true,
            created_at: None,
        }
    }

    fn request(items: Vec<CartItemRequest>, coupon_code: Option<&str>) -> CreateOrderRequest {
        CreateOrderRequest {
            items,
            delivery_address: Some("Rua das Flores, 10".to_string()),
            payment_method: Some("pix".to_string()),
            coupon_code: coupon_code.map(str::to_string),
            delivery_fee: None,
        }
    }

    fn item(product_id: i32, quantity: Decimal) -> CartItemRequest {
        CartItemRequest {
            product_id,
            quantity,
        }
    }

    fn service(store: InMemoryStore) -> OrderCommandService {
        OrderCommandService::new(Arc::new(store), Arc::new(NoOrders))
    }

    fn mem_store(
        products: Vec<Product>,
        coupon: Option<Coupon>,
        faults: Faults,
    ) -> (InMemoryStore, Arc<Mutex<StoreLog>>) {
        let log = Arc::new(Mutex::new(StoreLog::default()));
        let store = InMemoryStore {
            products,
            coupon,
            faults,
            log: log.clone(),
        };
        (store, log)
    }

    #[tokio::test]
    async fn checkout_writes_every_line_and_bumps_coupon_once() {
        let products = vec![product(1, dec!(10), dec!(5)), product(2, dec!(4), dec!(3))];
        let (store, log) = mem_store(products, Some(ten_percent_coupon()), Faults::default());
        let svc = service(store);

        let req = request(vec![item(1, dec!(2)), item(2, dec!(1))], Some("save10"));
        let response = svc.create_order(7, &req).await.unwrap();

        // subtotal 24, 10% off = 2.40
        assert_eq!(response.total, dec!(21.60));

        let log = log.lock().unwrap();
        assert!(log.committed);
        assert_eq!(log.orders.len(), 1);
        assert_eq!(log.orders[0].subtotal, dec!(24));
        assert_eq!(log.orders[0].discount_amount, dec!(2.40));
        assert_eq!(log.orders[0].coupon_code.as_deref(), Some("SAVE10"));
        assert_eq!(log.items.len(), 2);
        assert_eq!(log.decrements, vec![(1, dec!(2)), (2, dec!(1))]);
        assert_eq!(log.usage_bumps, vec![42]);
    }

    #[tokio::test]
    async fn missing_delivery_fee_defaults_to_zero() {
        let (store, log) = mem_store(vec![product(1, dec!(10), dec!(5))], None, Faults::default());
        let svc = service(store);

        let response = svc
            .create_order(7, &request(vec![item(1, dec!(1))], None))
            .await
            .unwrap();

        assert_eq!(response.total, dec!(10));
        let log = log.lock().unwrap();
        assert_eq!(log.orders[0].delivery_fee, Decimal::ZERO);
        assert_eq!(log.orders[0].discount_amount, Decimal::ZERO);
        assert!(log.orders[0].coupon_code.is_none());
        assert!(log.usage_bumps.is_empty());
    }

    #[tokio::test]
    async fn unknown_coupon_aborts_before_any_write() {
        let (store, log) = mem_store(vec![product(1, dec!(10), dec!(5))], None, Faults::default());
        let svc = service(store);

        let err = svc
            .create_order(7, &request(vec![item(1, dec!(1))], Some("NOPE")))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCoupon(msg) if msg == "Cupom inválido."));
        let log = log.lock().unwrap();
        assert!(log.orders.is_empty());
        assert!(log.items.is_empty());
        assert!(log.decrements.is_empty());
        assert!(!log.committed);
    }

    #[tokio::test]
    async fn blank_coupon_code_is_rejected_not_ignored() {
        let (store, log) = mem_store(vec![product(1, dec!(10), dec!(5))], None, Faults::default());
        let svc = service(store);

        let err = svc
            .create_order(7, &request(vec![item(1, dec!(1))], Some("   ")))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCoupon(msg) if msg == "Cupom inválido."));
        assert!(log.lock().unwrap().orders.is_empty());
    }

    #[tokio::test]
    async fn insufficient_stock_aborts_before_any_write() {
        let (store, log) = mem_store(vec![product(1, dec!(10), dec!(1))], None, Faults::default());
        let svc = service(store);

        let err = svc
            .create_order(7, &request(vec![item(1, dec!(2))], None))
            .await
            .unwrap_err();

        assert!(
            matches!(err, ServiceError::InsufficientStock(msg) if msg == "Estoque insuficiente para Produto 1")
        );
        assert!(log.lock().unwrap().orders.is_empty());
    }

    #[tokio::test]
    async fn store_failure_before_commit_rolls_back() {
        let faults = Faults {
            insert_order: true,
            ..Faults::default()
        };
        let (store, log) = mem_store(vec![product(1, dec!(10), dec!(5))], None, faults);
        let svc = service(store);

        let err = svc
            .create_order(7, &request(vec![item(1, dec!(1))], None))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Repo(RepositoryError::Sqlx(_))));
        let log = log.lock().unwrap();
        assert!(log.items.is_empty());
        assert!(!log.committed);
    }

    #[tokio::test]
    async fn commit_failure_is_a_server_error() {
        let faults = Faults {
            commit: true,
            ..Faults::default()
        };
        let (store, log) = mem_store(vec![product(1, dec!(10), dec!(5))], None, faults);
        let svc = service(store);

        let err = svc
            .create_order(7, &request(vec![item(1, dec!(1))], None))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Internal(_)));
        assert!(!log.lock().unwrap().committed);
    }
}
