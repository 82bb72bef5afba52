use crate::model::{ProductWithCategories, ProductWithCategoryIds};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Decimal,
    #[serde(rename = "type")]
    pub product_type: String,
    pub unit_value: Option<Decimal>,
    pub stock: Decimal,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub categories: Vec<String>,
}

impl From<ProductWithCategories> for ProductResponse {
    fn from(value: ProductWithCategories) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            photo: value.photo,
            price: value.price,
            product_type: value.product_type,
            unit_value: value.unit_value,
            stock: value.stock,
            is_active: value.is_active,
            created_at: value.created_at.map(|dt| dt.to_string()),
            categories: split_joined(value.categories),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AdminProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Decimal,
    #[serde(rename = "type")]
    pub product_type: String,
    pub unit_value: Option<Decimal>,
    pub stock: Decimal,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub category_ids: Vec<i32>,
}

impl From<ProductWithCategoryIds> for AdminProductResponse {
    fn from(value: ProductWithCategoryIds) -> Self {
        let category_ids = split_joined(value.category_ids)
            .iter()
            .filter_map(|id| id.parse::<i32>().ok())
            .collect();

        AdminProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            photo: value.photo,
            price: value.price,
            product_type: value.product_type,
            unit_value: value.unit_value,
            stock: value.stock,
            is_active: value.is_active,
            created_at: value.created_at.map(|dt| dt.to_string()),
            category_ids,
        }
    }
}

fn split_joined(joined: Option<String>) -> Vec<String> {
    joined
        .filter(|s| !s.is_empty())
        .map(|s| s.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(categories: Option<String>) -> ProductWithCategories {
        ProductWithCategories {
            id: 1,
            name: "Café".into(),
            description: None,
            photo: None,
            price: dec!(10.00),
            product_type: "package".into(),
            unit_value: None,
            stock: dec!(5),
            is_active: true,
            created_at: None,
            categories,
        }
    }

    #[test]
    fn categories_are_split_from_joined_column() {
        let resp = ProductResponse::from(row(Some("Bebidas,Grãos".into())));
        assert_eq!(resp.categories, vec!["Bebidas", "Grãos"]);
    }

    #[test]
    fn missing_categories_become_empty_list() {
        assert!(ProductResponse::from(row(None)).categories.is_empty());
        assert!(ProductResponse::from(row(Some(String::new())))
            .categories
            .is_empty());
    }
}
