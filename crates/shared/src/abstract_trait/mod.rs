mod banner;
mod category;
mod checkout;
mod coupon;
mod dashboard;
mod jwt;
mod order;
mod product;
mod stock;

pub use self::banner::{
    BannerCommandRepositoryTrait, BannerCommandServiceTrait, BannerQueryRepositoryTrait,
    BannerQueryServiceTrait, DynBannerCommandRepository, DynBannerCommandService,
    DynBannerQueryRepository, DynBannerQueryService,
};
pub use self::category::{
    CategoryCommandRepositoryTrait, CategoryCommandServiceTrait, CategoryQueryRepositoryTrait,
    CategoryQueryServiceTrait, DynCategoryCommandRepository, DynCategoryCommandService,
    DynCategoryQueryRepository, DynCategoryQueryService,
};
pub use self::checkout::{CheckoutStoreTrait, CheckoutTxTrait, DynCheckoutStore};
pub use self::coupon::{
    CouponCommandRepositoryTrait, CouponCommandServiceTrait, CouponQueryRepositoryTrait,
    CouponQueryServiceTrait, DynCouponCommandRepository, DynCouponCommandService,
    DynCouponQueryRepository, DynCouponQueryService,
};
pub use self::dashboard::{
    DashboardQueryRepositoryTrait, DashboardQueryServiceTrait, DynDashboardQueryRepository,
    DynDashboardQueryService,
};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, NewOrder, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::stock::{
    DynStockCommandRepository, DynStockCommandService, StockCommandRepositoryTrait,
    StockCommandServiceTrait,
};
