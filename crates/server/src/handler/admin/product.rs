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
    routing::{get, patch, post, put},
};
use shared::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{AdminProductResponse, ApiResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Admin Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products with category ids", body = ApiResponse<Vec<AdminProductResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all_admin().await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = "Admin Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created, id in data", body = ApiResponse<i32>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    tag = "Admin Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated"),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/admin/products/{id}/toggle",
    tag = "Admin Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "New active flag", body = ApiResponse<bool>),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn toggle_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.toggle_product(id).await?;
    Ok(Json(response))
}

pub fn admin_product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/products", get(get_admin_products))
        .route("/api/admin/products", post(create_product))
        .route("/api/admin/products/{id}", put(update_product))
        .route("/api/admin/products/{id}/toggle", patch(toggle_product))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_query_service.clone()))
        .layer(Extension(
            app_state.di_container.product_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
