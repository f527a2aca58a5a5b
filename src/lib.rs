#[macro_use]
extern crate tracing;

pub mod auth;
mod config;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod state;
mod utils;

pub use config::Config;
use error::{Error, Result};
pub use state::*;

use tokio::net::TcpListener;
use tokio::signal;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!(
        "listening on port {}",
        listener.local_addr()?.port()
    );

    let routes = handlers::routes::<S>();
    let app = middlewares::middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
