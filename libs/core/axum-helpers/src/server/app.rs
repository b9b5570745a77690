use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{
    create_cors_layer, create_permissive_cors_layer, error_request_path, security_headers,
};
use axum::{Router, middleware};
use core_config::Environment;
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - JSON 404/405 fallbacks
/// - error path stamping, tracing, security headers, CORS, compression
///
/// Health endpoints are merged by the caller with [`super::health_router`].
///
/// # CORS
///
/// Origins come from `ServerConfig::cors_allowed_origins`
/// (`CORS_ALLOWED_ORIGIN`). Development falls back to a permissive layer when
/// none are configured; production refuses to start without them.
///
/// # Errors
/// Returns `InvalidInput` when production has no origins or an origin is not
/// a valid header value.
pub fn create_router<T>(
    apis: Router,
    server_config: &ServerConfig,
    environment: &Environment,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_for(server_config, environment)?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn(error_request_path))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

fn cors_for(server_config: &ServerConfig, environment: &Environment) -> io::Result<CorsLayer> {
    let origins = &server_config.cors_allowed_origins;

    if origins.is_empty() {
        if environment.is_production() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN is required in production. Example: CORS_ALLOWED_ORIGIN=https://org.example.com",
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    }

    info!("CORS configured with allowed origins: {}", origins.join(","));
    create_cors_layer(origins).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
        )
    })
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` within
/// `shutdown_timeout`.
///
/// In-flight requests are drained before the function returns.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let signal_watcher = coordinator.clone();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    tokio::spawn(async move {
        signal_watcher.wait_for_signal().await;
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    fn api() -> Router {
        Router::new().route("/things", get(|| async { "things" }))
    }

    #[test]
    fn production_requires_cors_origins() {
        let config = ServerConfig::default();
        let result = create_router::<EmptyDoc>(api(), &config, &Environment::Production);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn development_without_origins_is_permissive() {
        let config = ServerConfig::default();
        assert!(create_router::<EmptyDoc>(api(), &config, &Environment::Development).is_ok());
    }

    #[tokio::test]
    async fn routes_are_nested_under_api() {
        let router =
            create_router::<EmptyDoc>(api(), &ServerConfig::default(), &Environment::Development)
                .unwrap();

        let response = router
            .oneshot(Request::get("/api/things").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
    }

    #[tokio::test]
    async fn unknown_path_gets_json_not_found_with_path() {
        let router =
            create_router::<EmptyDoc>(api(), &ServerConfig::default(), &Environment::Development)
                .unwrap();

        let response = router
            .oneshot(Request::get("/api/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["path"], "/api/nothing");
    }
}
