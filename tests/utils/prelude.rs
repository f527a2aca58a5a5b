#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::setup::{setup, Env};
pub use super::user::{make_admin, register_admin, register_user, User};
pub use super::{request::*, response::*};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use kata_backend::error;
pub use serde_json::{json, Value};
