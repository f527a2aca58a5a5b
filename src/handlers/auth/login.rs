use super::UserResponse;
use crate::{
    auth, error,
    extractors::{Json, ValidatedJson},
    Result, StateTrait,
};
use axum::extract::State;
use entity::users;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
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

/// An unknown email and a wrong password produce the same error so the
/// response does not reveal which one failed.
pub async fn login<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(error::INTERNAL);
    };

    let Some(user) = users::Entity::find()
        .filter(users::Column::Email.eq(&email))
        .one(state.db())
        .await?
    else {
        return Err(error::INVALID_CREDENTIALS);
    };

    if !auth::verify_password(&password, &user.password_hash)? {
        return Err(error::INVALID_CREDENTIALS);
    }

    let token = state.jwt().issue_token(user.id)?;

    Ok(Json(Response {
        message: "Logged in successfully",
        user: user.into(),
        token,
    }))
}
