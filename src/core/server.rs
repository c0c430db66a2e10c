// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;

use crate::config::state::AppState;
use crate::middlewares::{access_log, start_time};
use crate::routes::welcome_route::welcome_routes;
use crate::utils::error_handling::handle_global_error;

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(welcome_routes())
        .layer(
            ServiceBuilder::new()
                // start_time must sit above access_log so the Instant is
                // already in the extensions when the logger reads it back
                .layer(from_fn(start_time::start_time_middleware))
                .layer(from_fn(access_log::access_log_middleware))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(state.env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(state.env.max_request_body_size)),
        )
        .with_state(state)
}

/// Sets up the TCP listener from environment or binds to a new address
pub async fn setup_listener(state: &AppState) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", state.env.host, state.env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
