mod gracefullshutdown;
mod logs;
mod parse_datetime;
mod pricing;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::parse_datetime::parse_expiration_datetime;
pub use self::pricing::{
    AppliedDiscount, CouponRejection, PricedCart, PricedLine, PricingError, order_total,
    price_cart, round_money, validate_coupon,
};
