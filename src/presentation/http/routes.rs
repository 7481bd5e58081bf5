// src/presentation/http/routes.rs
use crate::config::RateLimit;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::editorial,
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(
    state: HttpState,
    allowed_origins: &[String],
    rate_limit: Option<RateLimit>,
) -> Router {
    let mut editorial_routes = Router::new()
        .route("/api/v1/editorial/evaluate", post(editorial::evaluate_draft))
        .route("/api/v1/editorial/prepare", post(editorial::prepare_draft))
        .route("/api/v1/editorial/keywords", post(editorial::edit_keywords))
        .route("/api/v1/editorial/rules", get(editorial::scoring_rules));

    if let Some(limit) = rate_limit {
        match rate_limit_layer(limit) {
            Some(layer) => editorial_routes = editorial_routes.layer(layer),
            None => tracing::warn!(?limit, "invalid rate limit, serving without one"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(editorial_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
