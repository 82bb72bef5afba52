use crate::{
    middleware::{SimpleValidatedJson, jwt::auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    config::AuthenticatedUser,
    domain::{
        requests::CreateOrderRequest,
        responses::{ApiResponse, CreateOrderResponse, OrderDetailResponse, OrderResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Empty cart, unavailable product, insufficient stock or rejected coupon"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(user): Extension<AuthenticatedUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/my-orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_my_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_user(user.id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its items", body = ApiResponse<OrderDetailResponse>),
        (status = 404, description = "Order not found or not owned by the caller"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(user, id).await?;
    Ok(Json(response))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders/my-orders", get(get_my_orders))
        .route("/api/orders/{id}", get(get_order))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_command_service.clone()))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
