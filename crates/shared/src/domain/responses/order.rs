use crate::model::{Order, OrderItem, OrderWithUser};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful checkout. This shape (and the 201 status) is a
/// contract with the client and must not change.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CreateOrderResponse {
    #[schema(example = "Pedido criado com sucesso")]
    pub message: String,
    pub order_id: i32,
    #[schema(example = 25.0)]
    pub total: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub total: Decimal,
    /// Kept alongside `total` because older clients read this alias.
    pub total_amount: Decimal,
    pub subtotal: Decimal,
    pub status: String,
    pub payment_method: Option<String>,
    pub coupon_code: Option<String>,
    pub discount_amount: Decimal,
    pub payment_status: String,
    pub delivery_address: Option<String>,
    pub delivery_status: String,
    pub delivery_fee: Decimal,
    pub created_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            user_id: value.user_id,
            total: value.total,
            total_amount: value.total,
            subtotal: value.subtotal,
            status: value.status,
            payment_method: value.payment_method,
            coupon_code: value.coupon_code,
            discount_amount: value.discount_amount,
            payment_status: value.payment_status,
            delivery_address: value.delivery_address,
            delivery_status: value.delivery_status,
            delivery_fee: value.delivery_fee,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: Decimal,
    pub price: Decimal,
    pub product_name: Option<String>,
    pub product_photo: Option<String>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            product_name: value.product_name,
            product_photo: value.product_photo,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AdminOrderResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub user_name: String,
    pub user_email: String,
    pub items: Vec<OrderItemResponse>,
}

impl AdminOrderResponse {
    pub fn from_row(value: OrderWithUser, items: Vec<OrderItemResponse>) -> Self {
        let order = Order {
            id: value.id,
            user_id: value.user_id,
            total: value.total,
            subtotal: value.subtotal,
            status: value.status,
            payment_method: value.payment_method,
            coupon_code: value.coupon_code,
            discount_amount: value.discount_amount,
            payment_status: value.payment_status,
            delivery_address: value.delivery_address,
            delivery_status: value.delivery_status,
            delivery_fee: value.delivery_fee,
            created_at: value.created_at,
        };

        AdminOrderResponse {
            order: order.into(),
            user_name: value.user_name,
            user_email: value.user_email,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn checkout_response_serializes_to_contract_shape() {
        let body = CreateOrderResponse {
            message: "Pedido criado com sucesso".to_string(),
            order_id: 12,
            total: dec!(25.00),
        };

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Pedido criado com sucesso");
        assert_eq!(json["order_id"], 12);
        // serde-float keeps money as a plain JSON number.
        assert_eq!(json["total"], serde_json::json!(25.0));
    }

    #[test]
    fn detail_response_flattens_order_fields() {
        let order = Order {
            id: 1,
            user_id: 2,
            total: dec!(23.00),
            subtotal: dec!(20.00),
            status: "pending".into(),
            payment_method: Some("pix".into()),
            coupon_code: Some("SAVE10".into()),
            discount_amount: dec!(2.00),
            payment_status: "pending".into(),
            delivery_address: Some("Rua A, 1".into()),
            delivery_status: "pending".into(),
            delivery_fee: dec!(5.00),
            created_at: None,
        };

        let detail = OrderDetailResponse {
            order: order.into(),
            items: vec![],
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["coupon_code"], "SAVE10");
        assert!(json["items"].as_array().unwrap().is_empty());
    }
}
