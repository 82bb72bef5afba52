use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CartItemRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[schema(value_type = f64, example = 2.0)]
    pub quantity: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Pedido deve conter pelo menos um item"))]
    pub items: Vec<CartItemRequest>,

    pub delivery_address: Option<String>,

    pub payment_method: Option<String>,

    #[schema(example = "SAVE10")]
    pub coupon_code: Option<String>,

    #[schema(value_type = Option<f64>, example = 5.0)]
    pub delivery_fee: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "shipped")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use validator::Validate;

    #[test]
    fn deserializes_checkout_payload() {
        let body = r#"{
            "items": [{"product_id": 1, "quantity": 2}],
            "delivery_address": "Rua das Flores, 10",
            "payment_method": "pix",
            "coupon_code": "SAVE10",
            "delivery_fee": 5.0
        }"#;

        let req: CreateOrderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].quantity, dec!(2));
        assert_eq!(req.delivery_fee, Some(dec!(5)));
        assert_eq!(req.coupon_code.as_deref(), Some("SAVE10"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let body = r#"{"items": [{"product_id": 3, "quantity": 0.5}]}"#;

        let req: CreateOrderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.items[0].quantity, dec!(0.5));
        assert!(req.coupon_code.is_none());
        assert!(req.delivery_fee.is_none());
    }

    #[test]
    fn empty_cart_fails_validation() {
        let body = r#"{"items": []}"#;

        let req: CreateOrderRequest = serde_json::from_str(body).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("items"));
    }
}
