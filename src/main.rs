use axum::{serve, Router};
use tokio::net::TcpListener;

use welcome_api::config::state::AppState;
use welcome_api::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    let app: Router = server::create_app(state.clone());

    let listener: TcpListener = server::setup_listener(&state).await?;

    println!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
