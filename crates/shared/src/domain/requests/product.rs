use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindProducts {
    /// Restricts the listing to products linked to this category.
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "O nome do produto é obrigatório"))]
    #[schema(example = "Café em grãos")]
    pub name: String,

    pub description: Option<String>,

    /// Image reference; upload handling lives outside this service.
    pub photo: Option<String>,

    #[schema(example = 10.0)]
    pub price: Decimal,

    /// Sale unit: "package" for countable items, "kg" for weighed ones.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "O tipo do produto é obrigatório"))]
    #[schema(example = "package")]
    pub product_type: String,

    pub unit_value: Option<Decimal>,

    #[schema(example = 50.0)]
    pub stock: Decimal,

    pub category_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "O nome do produto é obrigatório"))]
    pub name: String,

    pub description: Option<String>,

    pub photo: Option<String>,

    pub price: Decimal,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "O tipo do produto é obrigatório"))]
    pub product_type: String,

    pub unit_value: Option<Decimal>,

    pub stock: Decimal,

    pub is_active: bool,

    pub category_ids: Option<Vec<i32>>,
}
