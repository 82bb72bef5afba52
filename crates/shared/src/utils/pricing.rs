//! Pure checkout arithmetic: cart pricing against authoritative product rows
//! and coupon validation. Shared by the discount-preview endpoint and the
//! order transaction so the two can never disagree.

use crate::{
    domain::requests::CartItemRequest,
    model::{Coupon, DISCOUNT_FIXED, DISCOUNT_PERCENTAGE, Product},
};
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Produto não encontrado: id {product_id}")]
    ProductUnavailable { product_id: i32 },

    #[error("Estoque insuficiente para {name}")]
    InsufficientStock { name: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponRejection {
    #[error("Cupom inválido.")]
    Unknown,

    #[error("Este cupom não está mais ativo.")]
    Inactive,

    #[error("Cupom expirado.")]
    Expired,

    #[error("Este cupom atingiu o limite de usos.")]
    LimitReached,
}

/// Cart line with the unit price and product snapshot frozen at pricing
/// time; later catalog edits must not leak into the order.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub product_id: i32,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub product_name: String,
    pub product_photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedCart {
    pub lines: Vec<PricedLine>,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDiscount {
    pub coupon_id: i32,
    pub code: String,
    pub discount_amount: Decimal,
}

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Prices a cart against the product rows read inside the transaction;
/// `products[i]` is the lookup result for `items[i]` (None when the id is
/// unknown or the product inactive).
pub fn price_cart(
    items: &[CartItemRequest],
    products: &[Option<Product>],
) -> Result<PricedCart, PricingError> {
    debug_assert_eq!(items.len(), products.len());

    let mut lines = Vec::with_capacity(items.len());
    let mut subtotal = Decimal::ZERO;

    for (item, product) in items.iter().zip(products.iter()) {
        let product = product
            .as_ref()
            .ok_or(PricingError::ProductUnavailable {
                product_id: item.product_id,
            })?;

        if product.stock < item.quantity {
            return Err(PricingError::InsufficientStock {
                name: product.name.clone(),
            });
        }

        subtotal += product.price * item.quantity;

        lines.push(PricedLine {
            product_id: product.id,
            quantity: item.quantity,
            unit_price: product.price,
            product_name: product.name.clone(),
            product_photo: product.photo.clone(),
        });
    }

    Ok(PricedCart { lines, subtotal })
}

/// Validates a looked-up coupon against the cart subtotal at `now` and
/// computes the discount: percentage of the subtotal or a fixed amount,
/// clamped to the subtotal and rounded to two decimal places.
pub fn validate_coupon(
    coupon: Option<&Coupon>,
    subtotal: Decimal,
    now: NaiveDateTime,
) -> Result<AppliedDiscount, CouponRejection> {
    let coupon = coupon.ok_or(CouponRejection::Unknown)?;

    if !coupon.is_active {
        return Err(CouponRejection::Inactive);
    }

    if let Some(expires_at) = coupon.expires_at
        && expires_at < now
    {
        return Err(CouponRejection::Expired);
    }

    if let Some(limit) = coupon.usage_limit
        && coupon.times_used >= limit
    {
        return Err(CouponRejection::LimitReached);
    }

    let raw = if coupon.discount_type == DISCOUNT_PERCENTAGE {
        subtotal * coupon.discount_value / Decimal::ONE_HUNDRED
    } else if coupon.discount_type == DISCOUNT_FIXED {
        coupon.discount_value
    } else {
        Decimal::ZERO
    };

    // Clamp first, round after: the discount may never exceed what it
    // discounts.
    let discount_amount = round_money(raw.min(subtotal));

    Ok(AppliedDiscount {
        coupon_id: coupon.id,
        code: coupon.code.clone(),
        discount_amount,
    })
}

pub fn order_total(subtotal: Decimal, delivery_fee: Decimal, discount_amount: Decimal) -> Decimal {
    subtotal + delivery_fee - discount_amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    fn product(id: i32, name: &str, price: Decimal, stock: Decimal) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            photo: Some(format!("{name}.jpg")),
            price,
            product_type: "package".to_string(),
            unit_value: None,
            stock,
            is_active: true,
            created_at: None,
        }
    }

    fn item(product_id: i32, quantity: Decimal) -> CartItemRequest {
        CartItemRequest {
            product_id,
            quantity,
        }
    }

    fn coupon(discount_type: &str, value: Decimal) -> Coupon {
        Coupon {
            id: 1,
            code: "SAVE10".to_string(),
            discount_type: discount_type.to_string(),
            discount_value: value,
            expires_at: None,
            usage_limit: None,
            times_used: 0,
            is_active: true,
            created_at: None,
        }
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    #[test]
    fn prices_cart_and_captures_unit_price() {
        let items = vec![item(1, dec!(2))];
        let products = vec![Some(product(1, "Café", dec!(10.00), dec!(5)))];

        let cart = price_cart(&items, &products).unwrap();
        assert_eq!(cart.subtotal, dec!(20.00));
        assert_eq!(cart.lines[0].unit_price, dec!(10.00));
        assert_eq!(cart.lines[0].product_name, "Café");
        assert_eq!(cart.lines[0].product_photo.as_deref(), Some("Café.jpg"));
    }

    #[test]
    fn captured_price_survives_later_catalog_edits() {
        let items = vec![item(1, dec!(1))];
        let mut current = product(1, "Café", dec!(10.00), dec!(5));

        let cart = price_cart(&items, &[Some(current.clone())]).unwrap();

        // The catalog price changes after checkout; the priced line keeps
        // the value captured at purchase time.
        current.price = dec!(99.00);
        assert_eq!(cart.lines[0].unit_price, dec!(10.00));
    }

    #[test]
    fn fractional_quantities_are_supported() {
        let items = vec![item(2, dec!(0.5))];
        let products = vec![Some(product(2, "Queijo", dec!(40.00), dec!(2.5)))];

        let cart = price_cart(&items, &products).unwrap();
        assert_eq!(cart.subtotal, dec!(20.00));
    }

    #[test]
    fn unknown_product_aborts_with_its_id_in_the_message() {
        let items = vec![item(9, dec!(1))];

        let err = price_cart(&items, &[None]).unwrap_err();
        assert_eq!(err, PricingError::ProductUnavailable { product_id: 9 });
        assert_eq!(err.to_string(), "Produto não encontrado: id 9");
    }

    #[test]
    fn quantity_beyond_stock_is_rejected() {
        let items = vec![item(1, dec!(10))];
        let products = vec![Some(product(1, "Café", dec!(10.00), dec!(5)))];

        let err = price_cart(&items, &products).unwrap_err();
        assert_eq!(
            err,
            PricingError::InsufficientStock {
                name: "Café".to_string()
            }
        );
        assert_eq!(err.to_string(), "Estoque insuficiente para Café");
    }

    #[test]
    fn one_bad_line_fails_the_whole_cart() {
        let items = vec![item(1, dec!(1)), item(2, dec!(10))];
        let products = vec![
            Some(product(1, "Café", dec!(10.00), dec!(5))),
            Some(product(2, "Queijo", dec!(40.00), dec!(2.5))),
        ];

        assert!(price_cart(&items, &products).is_err());
    }

    #[test]
    fn percentage_coupon_discounts_the_subtotal() {
        let c = coupon(DISCOUNT_PERCENTAGE, dec!(10));

        let applied = validate_coupon(Some(&c), dec!(20.00), now()).unwrap();
        assert_eq!(applied.discount_amount, dec!(2.00));
    }

    #[test]
    fn fixed_coupon_uses_its_face_value() {
        let c = coupon(DISCOUNT_FIXED, dec!(15));

        let applied = validate_coupon(Some(&c), dec!(100.00), now()).unwrap();
        assert_eq!(applied.discount_amount, dec!(15.00));
    }

    #[test]
    fn discount_is_clamped_to_the_subtotal() {
        let over = coupon(DISCOUNT_PERCENTAGE, dec!(150));
        let applied = validate_coupon(Some(&over), dec!(100.00), now()).unwrap();
        assert_eq!(applied.discount_amount, dec!(100.00));

        let fixed = coupon(DISCOUNT_FIXED, dec!(500));
        let applied = validate_coupon(Some(&fixed), dec!(30.00), now()).unwrap();
        assert_eq!(applied.discount_amount, dec!(30.00));
    }

    #[test]
    fn percentage_discount_rounds_to_two_decimal_places() {
        let c = coupon(DISCOUNT_PERCENTAGE, dec!(10));

        let applied = validate_coupon(Some(&c), dec!(10.05), now()).unwrap();
        assert_eq!(applied.discount_amount, dec!(1.01));
    }

    #[test]
    fn missing_coupon_is_rejected() {
        let err = validate_coupon(None, dec!(10.00), now()).unwrap_err();
        assert_eq!(err, CouponRejection::Unknown);
        assert_eq!(err.to_string(), "Cupom inválido.");
    }

    #[test]
    fn inactive_coupon_is_rejected() {
        let mut c = coupon(DISCOUNT_PERCENTAGE, dec!(10));
        c.is_active = false;

        assert_eq!(
            validate_coupon(Some(&c), dec!(10.00), now()).unwrap_err(),
            CouponRejection::Inactive
        );
    }

    #[test]
    fn expired_coupon_is_rejected() {
        let mut c = coupon(DISCOUNT_PERCENTAGE, dec!(10));
        c.expires_at = Some(now() - Duration::days(1));

        assert_eq!(
            validate_coupon(Some(&c), dec!(10.00), now()).unwrap_err(),
            CouponRejection::Expired
        );
    }

    #[test]
    fn future_expiry_is_still_valid() {
        let mut c = coupon(DISCOUNT_PERCENTAGE, dec!(10));
        c.expires_at = Some(now() + Duration::days(1));

        assert!(validate_coupon(Some(&c), dec!(10.00), now()).is_ok());
    }

    #[test]
    fn exhausted_coupon_is_rejected() {
        let mut c = coupon(DISCOUNT_PERCENTAGE, dec!(10));
        c.usage_limit = Some(3);
        c.times_used = 3;

        assert_eq!(
            validate_coupon(Some(&c), dec!(10.00), now()).unwrap_err(),
            CouponRejection::LimitReached
        );
    }

    #[test]
    fn coupon_under_its_limit_is_accepted() {
        let mut c = coupon(DISCOUNT_PERCENTAGE, dec!(10));
        c.usage_limit = Some(3);
        c.times_used = 2;

        assert!(validate_coupon(Some(&c), dec!(10.00), now()).is_ok());
    }

    #[test]
    fn order_total_identity_holds() {
        // Cart of 2 x 10.00 with 5.00 delivery and no coupon.
        assert_eq!(order_total(dec!(20.00), dec!(5.00), Decimal::ZERO), dec!(25.00));

        // Same cart with SAVE10 (10%): discount 2.00, total 23.00.
        let c = coupon(DISCOUNT_PERCENTAGE, dec!(10));
        let applied = validate_coupon(Some(&c), dec!(20.00), now()).unwrap();
        assert_eq!(applied.discount_amount, dec!(2.00));
        assert_eq!(order_total(dec!(20.00), dec!(5.00), applied.discount_amount), dec!(23.00));
    }
}
