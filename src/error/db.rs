use sea_orm::{DbErr, RuntimeErr};
use sqlx::{postgres::PgDatabaseError, Error as SqlxError};
use std::borrow::Cow;

const UNIQUE_VIOLATION: &str = "23505";

/// Detects unique-index violations so insert races can surface as the same
/// duplicate errors as the application-level checks.
pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        let Some(db_err) = get_database_error(self) else {
            return false;
        };

        if !db_err.as_error().is::<PgDatabaseError>() {
            panic!("not using a postgres connection");
        }

        db_err.code() == Some(Cow::Borrowed(UNIQUE_VIOLATION))
            && db_err.constraint() == Some(constraint)
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn sqlx::error::DatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}
