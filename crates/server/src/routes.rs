use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use configs::ServerConfig;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::middleware::require_bearer;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod catalog;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, auth, catalog and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer, server: &ServerConfig) -> Router {
    // Bearer-protected auth routes
    let protected = Router::new()
        .route("/me", get(auth::me))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .merge(protected);

    let catalog_routes = Router::new()
        .route("/divisiones", get(catalog::divisions))
        .route("/carreras/:id_division", get(catalog::majors));

    Router::new()
        .route("/health", get(health))
        .nest(&server.auth_prefix, auth_routes)
        .nest(&server.catalog_prefix, catalog_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
