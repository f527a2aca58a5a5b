use crate::{auth::CurrentUser, error};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// Role gate for the mutating problem routes. Must run behind the claims
/// middleware: a request with no resolved user is unauthorized, a resolved
/// non-admin is forbidden. The token is never re-verified here.
#[derive(Debug, Clone, Default)]
pub struct RequireAdminLayer;

impl RequireAdminLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequireAdminLayer {
    type Service = RequireAdmin<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireAdmin { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequireAdmin<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequireAdmin<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(user) = req.extensions().get::<CurrentUser>() else {
            return Box::pin(async { Ok(error::COULD_NOT_GET_CLAIMS.into_response()) });
        };

        if !user.is_admin() {
            return Box::pin(async { Ok(error::NOT_ENOUGH_PERMISSIONS.into_response()) });
        }

        Box::pin(self.inner.call(req))
    }
}
