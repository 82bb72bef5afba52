mod banner;
mod category;
mod coupon;
mod order;
mod product;
mod stock;

pub use self::banner::{CreateBannerRequest, FindBanners};
pub use self::category::CreateCategoryRequest;
pub use self::coupon::{ApplyCouponRequest, CreateCouponRequest, UpdateCouponRequest};
pub use self::order::{CartItemRequest, CreateOrderRequest, UpdateOrderStatusRequest};
pub use self::product::{CreateProductRequest, FindProducts, UpdateProductRequest};
pub use self::stock::StockAdjustmentRequest;
