use crate::{
    middleware::{
        SimpleValidatedJson,
        jwt::{admin_middleware, auth_middleware},
    },
    state::AppState,
};
use axum::{Json, extract::Extension, middleware, response::IntoResponse, routing::post};
use shared::{
    abstract_trait::DynStockCommandService, domain::requests::StockAdjustmentRequest,
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/admin/stock/add",
    tag = "Admin Stock",
    security(("bearer_auth" = [])),
    request_body = StockAdjustmentRequest,
    responses(
        (status = 200, description = "Stock increased and movement logged"),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn add_stock(
    Extension(service): Extension<DynStockCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<StockAdjustmentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_stock(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/admin/stock/remove",
    tag = "Admin Stock",
    security(("bearer_auth" = [])),
    request_body = StockAdjustmentRequest,
    responses(
        (status = 200, description = "Stock decreased and movement logged"),
        (status = 400, description = "Insufficient stock"),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn remove_stock(
    Extension(service): Extension<DynStockCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<StockAdjustmentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_stock(&body).await?;
    Ok(Json(response))
}

pub fn admin_stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/stock/add", post(add_stock))
        .route("/api/admin/stock/remove", post(remove_stock))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.stock_command_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
