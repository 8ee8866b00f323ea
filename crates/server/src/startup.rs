use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::{seed, AuthConfig};
use service::storage::{InMemoryUserStore, UserStore};

use crate::errors::StartupError;
use crate::routes::{self, auth};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn parse_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Build shared state and the router; seeds demo users when configured.
pub async fn build_app(cfg: &AppConfig) -> Router {
    let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let state = auth::ServerState::new(
        users,
        AuthConfig { password_storage: cfg.auth.password_storage },
    );
    if cfg.auth.seed_demo_users {
        seed::seed_demo_users(state.auth.as_ref()).await;
    }
    routes::build_router(build_cors(), state)
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let addr = parse_bind_addr(&cfg)?;
    let app = build_app(&cfg).await;

    info!(%addr, password_storage = ?cfg.auth.password_storage, "starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
