use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindBanners {
    /// "normal" (desktop) or "celular"; anything else falls back to normal.
    #[serde(rename = "type")]
    pub banner_type: Option<String>,
}

/// Creates the desktop/mobile banner pair in one shot, mirroring how the
/// admin panel submits them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBannerRequest {
    #[validate(length(
        min = 1,
        message = "Título e as duas imagens (normal e celular) são obrigatórios."
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        message = "Título e as duas imagens (normal e celular) são obrigatórios."
    ))]
    pub photo_normal: String,

    #[validate(length(
        min = 1,
        message = "Título e as duas imagens (normal e celular) são obrigatórios."
    ))]
    pub photo_celular: String,
}
