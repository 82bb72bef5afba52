use crate::{
    middleware::{
        SimpleValidatedJson,
        jwt::{admin_middleware, auth_middleware},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::{DynCouponCommandService, DynCouponQueryService},
    domain::{
        requests::{CreateCouponRequest, UpdateCouponRequest},
        responses::{ApiResponse, CouponResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/coupons",
    tag = "Admin Coupon",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All coupons", body = ApiResponse<Vec<CouponResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_coupons(
    Extension(service): Extension<DynCouponQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/admin/coupons",
    tag = "Admin Coupon",
    security(("bearer_auth" = [])),
    request_body = CreateCouponRequest,
    responses(
        (status = 201, description = "Coupon created, id in data", body = ApiResponse<i32>),
        (status = 400, description = "Validation error or duplicate code"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_coupon(
    Extension(service): Extension<DynCouponCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCouponRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_coupon(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/coupons/{id}",
    tag = "Admin Coupon",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Coupon ID")),
    request_body = UpdateCouponRequest,
    responses(
        (status = 200, description = "Coupon updated"),
        (status = 400, description = "Validation error or duplicate code"),
        (status = 404, description = "Coupon not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn update_coupon(
    Extension(service): Extension<DynCouponCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCouponRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_coupon(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/admin/coupons/{id}",
    tag = "Admin Coupon",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Coupon ID")),
    responses(
        (status = 200, description = "Coupon deleted"),
        (status = 404, description = "Coupon not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn delete_coupon(
    Extension(service): Extension<DynCouponCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_coupon(id).await?;
    Ok(Json(response))
}

pub fn admin_coupon_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/coupons", get(get_coupons))
        .route("/api/admin/coupons", post(create_coupon))
        .route("/api/admin/coupons/{id}", put(update_coupon))
        .route("/api/admin/coupons/{id}", delete(delete_coupon))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.coupon_query_service.clone()))
        .layer(Extension(app_state.di_container.coupon_command_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
