mod admin;
mod banner;
mod category;
mod coupon;
mod order;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::admin::{
    admin_category_routes, admin_coupon_routes, admin_dashboard_routes, admin_order_routes,
    admin_product_routes, admin_stock_routes,
};
pub use self::banner::{banner_admin_routes, banner_routes};
pub use self::category::category_routes;
pub use self::coupon::coupon_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::get_product,
        category::get_categories,
        banner::get_banners,
        coupon::apply_coupon,

        order::create_order,
        order::get_my_orders,
        order::get_order,

        admin::product::get_admin_products,
        admin::product::create_product,
        admin::product::update_product,
        admin::product::toggle_product,

        admin::stock::add_stock,
        admin::stock::remove_stock,

        admin::order::get_admin_orders,
        admin::order::update_order_status,

        admin::coupon::get_coupons,
        admin::coupon::create_coupon,
        admin::coupon::update_coupon,
        admin::coupon::delete_coupon,

        admin::category::get_admin_categories,
        admin::category::create_category,
        admin::category::update_category,
        admin::category::delete_category,

        banner::get_all_banners,
        banner::create_banner,
        banner::toggle_banner,
        banner::delete_banner,

        admin::dashboard::get_dashboard,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Product", description = "Public catalog endpoints"),
        (name = "Category", description = "Public category endpoints"),
        (name = "Banner", description = "Banner endpoints"),
        (name = "Coupon", description = "Coupon preview endpoint"),
        (name = "Order", description = "Checkout and order history endpoints"),
        (name = "Admin Product", description = "Product management endpoints"),
        (name = "Admin Stock", description = "Stock adjustment endpoints"),
        (name = "Admin Order", description = "Order management endpoints"),
        (name = "Admin Coupon", description = "Coupon management endpoints"),
        (name = "Admin Category", description = "Category management endpoints"),
        (name = "Admin Dashboard", description = "Admin panel aggregates"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(product_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(banner_routes(shared_state.clone()))
            .merge(coupon_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(admin_product_routes(shared_state.clone()))
            .merge(admin_stock_routes(shared_state.clone()))
            .merge(admin_order_routes(shared_state.clone()))
            .merge(admin_coupon_routes(shared_state.clone()))
            .merge(admin_category_routes(shared_state.clone()))
            .merge(banner_admin_routes(shared_state.clone()))
            .merge(admin_dashboard_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
