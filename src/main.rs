use kata_backend::{Config, State};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_line_number(true)
        .init();

    let config = Config::from_env()?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr).await?;

    let state = State::new(&config).await?;

    kata_backend::run(listener, state).await
}
