use crate::{auth::CurrentUser, error, Error};
use axum::{extract::FromRequestParts, http::request::Parts};

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<CurrentUser>()
            .ok_or(error::COULD_NOT_GET_CLAIMS)
    }
}
