use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StockAdjustmentRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[schema(example = 10.0)]
    pub quantity: Decimal,

    #[schema(example = "Reposição semanal")]
    pub reason: Option<String>,
}
