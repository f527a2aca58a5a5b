use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 5000;

/// Process-wide configuration, read from the environment exactly once at
/// startup and passed by reference from there on.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

        let port = match env::var("PORT") {
            Ok(port) => port.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET is not set")?;

        Ok(Config {
            database_url,
            port,
            jwt_secret,
        })
    }
}
