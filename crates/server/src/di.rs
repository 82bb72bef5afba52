use shared::{
    abstract_trait::{
        DynBannerCommandRepository, DynBannerCommandService, DynBannerQueryRepository,
        DynBannerQueryService, DynCategoryCommandRepository, DynCategoryCommandService,
        DynCategoryQueryRepository, DynCategoryQueryService, DynCheckoutStore,
        DynCouponCommandRepository,
        DynCouponCommandService, DynCouponQueryRepository, DynCouponQueryService,
        DynDashboardQueryRepository, DynDashboardQueryService, DynOrderCommandRepository,
        DynOrderCommandService, DynOrderQueryRepository, DynOrderQueryService,
        DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
        DynProductQueryService, DynStockCommandRepository, DynStockCommandService,
    },
    config::ConnectionPool,
    repository::{
        BannerCommandRepository, BannerQueryRepository, CategoryCommandRepository,
        CategoryQueryRepository, CheckoutStore, CouponCommandRepository, CouponQueryRepository,
        DashboardQueryRepository, OrderCommandRepository, OrderQueryRepository,
        ProductCommandRepository, ProductQueryRepository, StockCommandRepository,
    },
    service::{
        BannerCommandService, BannerQueryService, CategoryCommandService, CategoryQueryService,
        CouponCommandService, CouponQueryService, DashboardQueryService, OrderCommandService,
        OrderQueryService, ProductCommandService, ProductQueryService, StockCommandService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
    pub category_query_service: DynCategoryQueryService,
    pub category_command_service: DynCategoryCommandService,
    pub coupon_query_service: DynCouponQueryService,
    pub coupon_command_service: DynCouponCommandService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub banner_query_service: DynBannerQueryService,
    pub banner_command_service: DynBannerCommandService,
    pub stock_command_service: DynStockCommandService,
    pub dashboard_query_service: DynDashboardQueryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query_service", &"DynProductQueryService")
            .field("product_command_service", &"DynProductCommandService")
            .field("category_query_service", &"DynCategoryQueryService")
            .field("category_command_service", &"DynCategoryCommandService")
            .field("coupon_query_service", &"DynCouponQueryService")
            .field("coupon_command_service", &"DynCouponCommandService")
            .field("order_query_service", &"DynOrderQueryService")
            .field("order_command_service", &"DynOrderCommandService")
            .field("banner_query_service", &"DynBannerQueryService")
            .field("banner_command_service", &"DynBannerCommandService")
            .field("stock_command_service", &"DynStockCommandService")
            .field("dashboard_query_service", &"DynDashboardQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repository: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repository: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let category_query_repository: DynCategoryQueryRepository =
            Arc::new(CategoryQueryRepository::new(pool.clone()));
        let category_command_repository: DynCategoryCommandRepository =
            Arc::new(CategoryCommandRepository::new(pool.clone()));
        let coupon_query_repository: DynCouponQueryRepository =
            Arc::new(CouponQueryRepository::new(pool.clone()));
        let coupon_command_repository: DynCouponCommandRepository =
            Arc::new(CouponCommandRepository::new(pool.clone()));
        let order_query_repository: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repository: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let banner_query_repository: DynBannerQueryRepository =
            Arc::new(BannerQueryRepository::new(pool.clone()));
        let banner_command_repository: DynBannerCommandRepository =
            Arc::new(BannerCommandRepository::new(pool.clone()));
        let stock_command_repository: DynStockCommandRepository =
            Arc::new(StockCommandRepository::new(pool.clone()));
        let dashboard_query_repository: DynDashboardQueryRepository =
            Arc::new(DashboardQueryRepository::new(pool.clone()));

        let product_query_service: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repository.clone()));
        let product_command_service: DynProductCommandService = Arc::new(
            ProductCommandService::new(product_command_repository.clone()),
        );
        let category_query_service: DynCategoryQueryService =
            Arc::new(CategoryQueryService::new(category_query_repository));
        let category_command_service: DynCategoryCommandService =
            Arc::new(CategoryCommandService::new(category_command_repository));
        let coupon_query_service: DynCouponQueryService =
            Arc::new(CouponQueryService::new(coupon_query_repository.clone()));
        let coupon_command_service: DynCouponCommandService =
            Arc::new(CouponCommandService::new(coupon_command_repository.clone()));
        let order_query_service: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repository));
        let checkout_store: DynCheckoutStore = Arc::new(CheckoutStore::new(
            pool,
            product_query_repository.clone(),
            product_command_repository,
            order_command_repository.clone(),
            coupon_query_repository,
            coupon_command_repository,
        ));
        let order_command_service: DynOrderCommandService = Arc::new(OrderCommandService::new(
            checkout_store,
            order_command_repository,
        ));
        let banner_query_service: DynBannerQueryService =
            Arc::new(BannerQueryService::new(banner_query_repository));
        let banner_command_service: DynBannerCommandService =
            Arc::new(BannerCommandService::new(banner_command_repository));
        let stock_command_service: DynStockCommandService = Arc::new(StockCommandService::new(
            product_query_repository,
            stock_command_repository,
        ));
        let dashboard_query_service: DynDashboardQueryService =
            Arc::new(DashboardQueryService::new(dashboard_query_repository));

        Self {
            product_query_service,
            product_command_service,
            category_query_service,
            category_command_service,
            coupon_query_service,
            coupon_command_service,
            order_query_service,
            order_command_service,
            banner_query_service,
            banner_command_service,
            stock_command_service,
            dashboard_query_service,
        }
    }
}
