mod password;
mod token;

pub use password::*;
pub use token::*;

use entity::users::{self, Role};
use uuid::Uuid;

/// The authenticated principal, resolved from a verified token by the
/// claims middleware. Deliberately excludes the password hash.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<users::Model> for CurrentUser {
    fn from(user: users::Model) -> Self {
        CurrentUser {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}
