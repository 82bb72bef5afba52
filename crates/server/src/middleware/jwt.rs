use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, config::AuthenticatedUser, errors::ErrorResponse};

/// Accepts the token either from the `token` cookie or from a Bearer
/// Authorization header, verifies it and stores the identity in the
/// request extensions.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Acesso negado. Token não fornecido.".to_string(),
                }),
            ));
        }
    };

    let user = match jwt.verify_token(&token, "access") {
        Ok(user) => user,
        Err(_) => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Token inválido.".to_string(),
                }),
            ));
        }
    };

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Runs after `auth_middleware`; rejects anyone whose token does not
/// carry the admin flag.
pub async fn admin_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if !user.is_admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Acesso negado. Apenas administradores.".to_string(),
            }),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::to_bytes,
        middleware as axum_middleware,
        routing::get,
    };
    use shared::{abstract_trait::JwtServiceTrait, config::JwtConfig};
    use tower::ServiceExt;

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        format!("{}:{}", user.id, user.is_admin)
    }

    fn app(admin_only: bool) -> (Router, JwtConfig) {
        let jwt = JwtConfig::new("segredo-de-teste");
        let jwt_service: DynJwtService = std::sync::Arc::new(jwt.clone());

        let mut router = Router::new().route("/private", get(whoami));
        if admin_only {
            router = router.route_layer(axum_middleware::from_fn(admin_middleware));
        }
        let router = router
            .route_layer(axum_middleware::from_fn(auth_middleware))
            .layer(Extension(jwt_service));

        (router, jwt)
    }

    fn get_private(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/private");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let (app, _) = app(false);

        let response = app.oneshot(get_private(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Acesso negado. Token não fornecido.");
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let (app, _) = app(false);

        let response = app.oneshot(get_private(Some("nonsense"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Token inválido.");
    }

    #[tokio::test]
    async fn bearer_token_reaches_the_handler() {
        let (app, jwt) = app(false);
        let token = jwt.generate_token(7, false, "access").unwrap();

        let response = app.oneshot(get_private(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"7:false");
    }

    #[tokio::test]
    async fn non_admin_is_forbidden_on_admin_routes() {
        let (app, jwt) = app(true);
        let token = jwt.generate_token(7, false, "access").unwrap();

        let response = app.oneshot(get_private(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Acesso negado. Apenas administradores.");
    }

    #[tokio::test]
    async fn admin_token_passes_both_gates() {
        let (app, jwt) = app(true);
        let token = jwt.generate_token(1, true, "access").unwrap();

        let response = app.oneshot(get_private(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
