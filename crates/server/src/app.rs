use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Extension, Router,
};
use chess_core::OpeningClassifier;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes;

/// Build the router with CORS, request tracing and the shared classifier.
pub fn build_router(classifier: Arc<OpeningClassifier>, config: &Config) -> anyhow::Result<Router> {
    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("Invalid CORS_ORIGIN '{}'", config.cors_origin))?;

    // Credentials are allowed, so the origin must be explicit rather than `Any`.
    // A list only echoes the origin back when the request's Origin matches.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-http-method-override"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-xsrf-token"),
        ]);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/openings/{*fen}", get(routes::openings::get_openings))
        .fallback(routes::not_found)
        .layer(Extension(classifier))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}
