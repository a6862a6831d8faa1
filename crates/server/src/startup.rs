use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect, migrate if configured, and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
    }
    let state = ServerState::from_config(db, cfg)?;
    Ok(routes::build_router(state, build_cors(), &cfg.server))
}

/// Public entry: load configuration from `config.toml`/environment and serve.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = AppConfig::load_and_validate()?;
    run_with_config(cfg).await
}

/// Serve with an already validated configuration.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    info!(
        %addr,
        event = "listening",
        auth_prefix = %cfg.server.auth_prefix,
        catalog_prefix = %cfg.server.catalog_prefix,
        environment = ?cfg.app.environment,
        "starting enrollment api"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
