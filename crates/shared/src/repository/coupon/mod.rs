mod command;
mod query;

pub use self::command::CouponCommandRepository;
pub use self::query::CouponQueryRepository;
