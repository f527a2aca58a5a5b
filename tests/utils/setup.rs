use super::request::RequestBuilder;
use kata_backend::{Config, State};
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::{net::SocketAddr, sync::Arc};
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;

const JWT_SECRET: &str = "test-jwt-secret";

async fn setup_database() -> (ContainerAsync<Postgres>, DbConn, String) {
    let container = Postgres::default().with_tag("16").start().await.unwrap();

    let connection_string = format!(
        "postgres://postgres:postgres@{}:{}/postgres",
        container.get_host().await.unwrap(),
        container.get_host_port_ipv4(5432).await.unwrap(),
    );

    let db = Database::connect(ConnectOptions::new(connection_string.clone()))
        .await
        .unwrap();

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    (container, db, connection_string)
}

async fn setup_backend(config: &Config, db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(config, db);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        kata_backend::run(listener, state).await.unwrap();
    });

    addr
}

#[allow(unused)]
pub async fn setup() -> Env {
    dotenvy::dotenv().ok();

    let (container, db, database_url) = setup_database().await;

    let config = Config {
        database_url,
        port: 0,
        jwt_secret: JWT_SECRET.to_owned(),
    };

    let addr = setup_backend(&config, db.clone()).await;

    Env {
        addr,
        client: Client::new(),
        db,
        _container: Arc::new(container),
    }
}

#[derive(Clone)]
pub struct Env {
    addr: SocketAddr,
    client: Client,
    db: DbConn,
    _container: Arc<ContainerAsync<Postgres>>,
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }

    pub fn db(&self) -> &DbConn {
        &self.db
    }
}
