mod banner;
mod category;
mod coupon;
mod dashboard;
mod order;
mod product;
mod stock;

pub use self::banner::{BannerCommandService, BannerQueryService};
pub use self::category::{CategoryCommandService, CategoryQueryService};
pub use self::coupon::{CouponCommandService, CouponQueryService};
pub use self::dashboard::DashboardQueryService;
pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::stock::StockCommandService;

use crate::errors::ServiceError;
use validator::Validate;

/// Runs the derived validators and flattens the field errors into the
/// service-level validation variant.
pub(crate) fn check_request<T: Validate>(req: &T) -> Result<(), ServiceError> {
    req.validate().map_err(|errors| {
        let messages = errors
            .field_errors()
            .into_values()
            .flatten()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        ServiceError::Validation(messages)
    })
}
