mod auth;
mod problem;

use crate::state::StateTrait;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest("/api/auth", auth::routes::<S>())
        .nest("/api/problems", problem::routes::<S>())
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
