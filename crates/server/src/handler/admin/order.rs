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
    middleware,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::UpdateOrderStatusRequest,
        responses::{AdminOrderResponse, ApiResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "Admin Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All orders with buyer info and items", body = ApiResponse<Vec<AdminOrderResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all_admin().await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    tag = "Admin Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(id, &body).await?;
    Ok(Json(response))
}

pub fn admin_order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/orders", get(get_admin_orders))
        .route("/api/admin/orders/{id}/status", patch(update_order_status))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_query_service.clone()))
        .layer(Extension(app_state.di_container.order_command_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
