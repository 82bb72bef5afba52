use crate::{
    middleware::jwt::{admin_middleware, auth_middleware},
    state::AppState,
};
use axum::{Json, extract::Extension, middleware, response::IntoResponse, routing::get};
use shared::{
    abstract_trait::DynDashboardQueryService,
    domain::responses::{ApiResponse, DashboardResponse},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "Admin Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Admin panel aggregates", body = ApiResponse<DashboardResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_dashboard(
    Extension(service): Extension<DynDashboardQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.summary().await?;
    Ok(Json(response))
}

pub fn admin_dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/dashboard", get(get_dashboard))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(
            app_state.di_container.dashboard_query_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
