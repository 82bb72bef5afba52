use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynProductQueryService,
    domain::{
        requests::FindProducts,
        responses::{ApiResponse, ProductResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindProducts),
    responses(
        (status = 200, description = "Active products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active_by_id(id).await?;
    Ok(Json(response))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .layer(Extension(app_state.di_container.product_query_service.clone()))
}
