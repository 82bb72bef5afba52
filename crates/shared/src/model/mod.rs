mod banner;
mod category;
mod coupon;
mod dashboard;
mod order;
mod order_item;
mod product;
mod stock_movement;

pub use self::banner::{BANNER_CELULAR, BANNER_NORMAL, Banner};
pub use self::category::Category;
pub use self::coupon::{Coupon, DISCOUNT_FIXED, DISCOUNT_PERCENTAGE};
pub use self::dashboard::{DashboardSummary, RecentOrder, TopSellingProduct};
pub use self::order::{Order, OrderWithUser};
pub use self::order_item::OrderItem;
pub use self::product::{Product, ProductWithCategories, ProductWithCategoryIds};
pub use self::stock_movement::{MOVEMENT_ADD, MOVEMENT_REMOVE};
