use super::UserResponse;
use crate::{
    auth,
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::users::{self, constraints::*, Role};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    username: Option<String>,
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    email: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    message: &'static str,
    user: UserResponse,
    token: String,
}

pub async fn register<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    // `required` has already run, so the fields are present
    let (Some(username), Some(email), Some(password)) =
        (request.username, request.email, request.password)
    else {
        return Err(error::INTERNAL);
    };

    let existing = users::Entity::find()
        .filter(users::Column::Email.eq(&email))
        .one(state.db())
        .await?;

    if existing.is_some() {
        return Err(error::DUPLICATE_EMAIL);
    }

    let existing = users::Entity::find()
        .filter(users::Column::Username.eq(&username))
        .one(state.db())
        .await?;

    if existing.is_some() {
        return Err(error::DUPLICATE_USERNAME);
    }

    let password_hash = auth::hash_password(&password)?;

    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username),
        email: Set(email),
        password_hash: Set(password_hash),
        role: Set(Role::User),
        created_at: Set(Utc::now()),
    };

    let result = users::Entity::insert(user)
        .exec_with_returning(state.db())
        .await;

    let user = match result {
        Err(err) if err.unique_violation(UC_USERS_EMAIL) => return Err(error::DUPLICATE_EMAIL),
        Err(err) if err.unique_violation(UC_USERS_USERNAME) => {
            return Err(error::DUPLICATE_USERNAME)
        }
        r => r?,
    };

    let token = state.jwt().issue_token(user.id)?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            message: "User registered successfully",
            user: user.into(),
            token,
        }),
    ))
}
