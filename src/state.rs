use crate::{auth::Jwt, Config};
use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Jwt;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
}

impl State {
    pub async fn new(config: &Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(&config.database_url).await?;
        Ok(Self::with_database(config, database))
    }

    pub fn with_database(config: &Config, database: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database,
            jwt: Jwt::new(&config.jwt_secret),
        })
    }

    async fn connect_database(url: &str) -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .context("failed to connect to database")?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }
}
