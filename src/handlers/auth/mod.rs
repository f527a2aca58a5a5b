mod login;
mod register;

use crate::StateTrait;
use axum::{routing::post, Router};
use entity::users::{self, Role};
use serde::Serialize;
use uuid::Uuid;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/register", post(register::register::<S>))
        .route("/login", post(login::login::<S>))
}

/// Public projection of a user. The password hash never leaves the store
/// layer.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: Uuid,
    username: String,
    email: String,
    role: Role,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}
