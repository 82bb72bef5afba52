use crate::{
    middleware::{
        SimpleValidatedJson,
        jwt::{admin_middleware, auth_middleware},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use axum::middleware;
use shared::{
    abstract_trait::{DynBannerCommandService, DynBannerQueryService},
    domain::{
        requests::{CreateBannerRequest, FindBanners},
        responses::{ApiResponse, BannerResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/banners",
    tag = "Banner",
    params(FindBanners),
    responses(
        (status = 200, description = "Active banners of the requested type", body = ApiResponse<Vec<BannerResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_banners(
    Extension(service): Extension<DynBannerQueryService>,
    Query(params): Query<FindBanners>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_active(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/banners/all",
    tag = "Banner",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All banners, active or not", body = ApiResponse<Vec<BannerResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_all_banners(
    Extension(service): Extension<DynBannerQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/banners",
    tag = "Banner",
    security(("bearer_auth" = [])),
    request_body = CreateBannerRequest,
    responses(
        (status = 201, description = "Banner pair created"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_banner(
    Extension(service): Extension<DynBannerCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateBannerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_banners(&body).await?;
    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/banners/{id}/toggle",
    tag = "Banner",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "New active flag", body = ApiResponse<bool>),
        (status = 404, description = "Banner not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn toggle_banner(
    Extension(service): Extension<DynBannerCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.toggle_banner(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = "Banner",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "Banner deleted"),
        (status = 404, description = "Banner not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn delete_banner(
    Extension(service): Extension<DynBannerCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_banner(id).await?;
    Ok(Json(response))
}

pub fn banner_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/banners", get(get_banners))
        .layer(Extension(app_state.di_container.banner_query_service.clone()))
}

/// Management routes share the `/api/banners` prefix with the public
/// listing, so they carry their own middleware stack.
pub fn banner_admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/banners/all", get(get_all_banners))
        .route("/api/banners", post(create_banner))
        .route("/api/banners/{id}/toggle", patch(toggle_banner))
        .route("/api/banners/{id}", delete(delete_banner))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.banner_query_service.clone()))
        .layer(Extension(
            app_state.di_container.banner_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
