mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;
use std::borrow::Cow;
use validator::ValidationErrors;

#[derive(Debug)]
pub struct Error {
    status: StatusCode,
    code: &'static str,
    message: Cow<'static, str>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, code: &'static str, message: &'static str) -> Error {
        Self {
            status,
            code,
            message: Cow::Borrowed(message),
        }
    }

    /// Collects every violated field rule into a single message, sorted for
    /// a stable output.
    pub fn validation(errors: &ValidationErrors) -> Error {
        let mut messages = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => message.clone().into_owned(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect::<Vec<_>>();

        messages.sort();
        messages.dedup();

        Self {
            status: StatusCode::BAD_REQUEST,
            code: "validation",
            message: Cow::Owned(messages.join(", ")),
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "code": self.code(),
                "message": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        error!("failed to serialize json: {:?}", error);
        constants::INTERNAL
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $msg:literal) => {
        pub const $name: $crate::error::Error =
            $crate::error::Error::new(::axum::http::StatusCode::$status, $code, $msg);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
