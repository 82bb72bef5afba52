use crate::{middleware::SimpleValidatedJson, state::AppState};
use axum::{Json, extract::Extension, response::IntoResponse, routing::post};
use shared::{
    abstract_trait::DynCouponQueryService,
    domain::{requests::ApplyCouponRequest, responses::AppliedCouponResponse},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/coupons/apply",
    tag = "Coupon",
    request_body = ApplyCouponRequest,
    responses(
        (status = 200, description = "Discount preview", body = AppliedCouponResponse),
        (status = 400, description = "Coupon rejected or invalid payload"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn apply_coupon(
    Extension(service): Extension<DynCouponQueryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ApplyCouponRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.apply(&body).await?;
    Ok(Json(response))
}

pub fn coupon_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/coupons/apply", post(apply_coupon))
        .layer(Extension(app_state.di_container.coupon_query_service.clone()))
}
