mod guard;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use guard::middleware::action_guard_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_state = guard::build_state().expect("valid guard configuration");

    let app = Router::new()
        .route("/", get(routes::home))
        .route("/api/admin/auth", post(routes::admin_login))
        .route("/api/metadata", get(routes::metadata))
        .layer(axum::middleware::from_fn_with_state(
            app_state.guard.clone(),
            action_guard_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    tracing::info!("axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
