use serde::Serialize;
use utoipa::ToSchema;

/// Every failed request answers with this body, mirroring what the
/// storefront client already expects.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
