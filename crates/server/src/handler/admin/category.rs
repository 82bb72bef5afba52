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
    abstract_trait::{DynCategoryCommandService, DynCategoryQueryService},
    domain::{
        requests::CreateCategoryRequest,
        responses::{ApiResponse, CategoryResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/categories",
    tag = "Admin Category",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_categories(
    Extension(service): Extension<DynCategoryQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = "Admin Category",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    tag = "Admin Category",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category updated"),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 404, description = "Category not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_category(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    tag = "Admin Category",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category and its product links deleted"),
        (status = 404, description = "Category not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_category(id).await?;
    Ok(Json(response))
}

pub fn admin_category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/categories", get(get_admin_categories))
        .route("/api/admin/categories", post(create_category))
        .route("/api/admin/categories/{id}", put(update_category))
        .route("/api/admin/categories/{id}", delete(delete_category))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(
            app_state.di_container.category_query_service.clone(),
        ))
        .layer(Extension(
            app_state.di_container.category_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
