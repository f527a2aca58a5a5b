mod current_user;
mod json;

pub use json::*;
