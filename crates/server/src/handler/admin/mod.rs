pub mod category;
pub mod coupon;
pub mod dashboard;
pub mod order;
pub mod product;
pub mod stock;

pub use self::category::admin_category_routes;
pub use self::coupon::admin_coupon_routes;
pub use self::dashboard::admin_dashboard_routes;
pub use self::order::admin_order_routes;
pub use self::product::admin_product_routes;
pub use self::stock::admin_stock_routes;
