use crate::{auth::CurrentUser, error, StateTrait};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use entity::users;
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use sea_orm::EntityTrait;
use tracing::Instrument;

/// Resolves a bearer token to the full user record and attaches it to the
/// request. Requests without a usable token simply pass through; protected
/// handlers reject them downstream.
pub async fn get_claims<S: StateTrait>(
    State(state): State<S>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(header) = request.headers().typed_get::<Authorization<Bearer>>() else {
        return next.run(request).await;
    };

    let Ok(claims) = state.jwt().get_claims(header.token()) else {
        return next.run(request).await;
    };

    let user = match users::Entity::find_by_id(claims.sub).one(state.db()).await {
        Ok(Some(user)) => user,
        Ok(None) => return next.run(request).await,
        Err(error) => {
            error!("database error: {:?}", error);
            return error::DATABASE_ERROR.into_response();
        }
    };

    let span = info_span!("claims", user_id = user.id.to_string());

    request.extensions_mut().insert(CurrentUser::from(user));

    next.run(request).instrument(span).await
}
