#![allow(dead_code)]
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use server::routes;
use server::state::ServerState;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.auth.jwt_secret = "test-secret".into();
    cfg.auth.bcrypt_cost = 4;
    cfg
}

/// Router over a fresh in-memory database, plus a handle to that database.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<(Router, DatabaseConnection)> {
    let db = models::db::connect_sqlite_memory().await?;
    let state = ServerState::from_config(db.clone(), cfg)?;
    Ok((routes::build_router(state, cors(), &cfg.server), db))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        req = req.header("authorization", format!("Bearer {token}"));
    }
    let req = match body {
        Some(v) => req.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => req.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    Ok((status, json))
}

/// Request with an arbitrary body and content type; returns the response content type too.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: &str,
    authorization: Option<&str>,
) -> anyhow::Result<(StatusCode, String, Value)> {
    let mut req = Request::builder().method(method).uri(uri).header("content-type", content_type);
    if let Some(value) = authorization {
        req = req.header("authorization", value);
    }
    let resp = app.clone().oneshot(req.body(Body::from(body.to_string()))?).await?;
    let status = resp.status();
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Ok((status, ct, json))
}

pub fn registration(correo: &str, password: &str) -> Value {
    serde_json::json!({
        "nombre": "Ana",
        "apellido_paterno": "Pérez",
        "apellido_materno": "López",
        "correo": correo,
        "password": password,
        "cuatrimestre": 1,
        "id_rol": 3
    })
}

pub fn credentials(correo: &str, password: &str) -> Value {
    serde_json::json!({ "correo": correo, "password": password })
}

/// Stand-in for the administrative approval of an enrollment.
pub async fn approve(db: &DatabaseConnection, correo: &str) -> anyhow::Result<i32> {
    use models::enrollment::{self, EnrollmentStatus};
    let user = models::user::find_by_email(db, correo)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no user {correo}"))?;
    enrollment::set_status(db, user.id_usuario, &EnrollmentStatus::Approved).await?;
    Ok(user.id_usuario)
}
