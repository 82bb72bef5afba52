mod banner;
mod category;
mod checkout;
mod coupon;
mod dashboard;
mod order;
mod product;
mod stock;

pub use self::banner::{BannerCommandRepository, BannerQueryRepository};
pub use self::category::{CategoryCommandRepository, CategoryQueryRepository};
pub use self::checkout::CheckoutStore;
pub use self::coupon::{CouponCommandRepository, CouponQueryRepository};
pub use self::dashboard::DashboardQueryRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::stock::StockCommandRepository;
