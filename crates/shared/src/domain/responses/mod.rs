mod api;
mod banner;
mod category;
mod coupon;
mod dashboard;
mod order;
mod product;

pub use self::api::ApiResponse;
pub use self::banner::BannerResponse;
pub use self::category::CategoryResponse;
pub use self::coupon::{AppliedCouponResponse, CouponResponse};
pub use self::dashboard::{DashboardResponse, RecentOrderResponse, TopSellingProductResponse};
pub use self::order::{
    AdminOrderResponse, CreateOrderResponse, OrderDetailResponse, OrderItemResponse, OrderResponse,
};
pub use self::product::{AdminProductResponse, ProductResponse};
