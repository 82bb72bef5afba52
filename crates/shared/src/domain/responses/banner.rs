use crate::model::Banner;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct BannerResponse {
    pub id: i32,
    pub title: String,
    pub photo: String,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub banner_type: String,
    pub created_at: Option<String>,
}

impl From<Banner> for BannerResponse {
    fn from(value: Banner) -> Self {
        BannerResponse {
            id: value.id,
            title: value.title,
            photo: value.photo,
            is_active: value.is_active,
            banner_type: value.banner_type,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
