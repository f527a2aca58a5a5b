use crate::{error, Result};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

/// Hash a plaintext password with Argon2id and a random salt, producing a
/// PHC-format string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    match Argon2::default().hash_password(password.as_bytes(), &salt) {
        Ok(hash) => Ok(hash.to_string()),
        Err(error) => {
            error!(error = error.to_string(), "failed to hash password");
            Err(error::INTERNAL)
        }
    }
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on a mismatch; an error only for a malformed stored
/// hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        error!("stored password hash is malformed");
        return Err(error::INTERNAL);
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(error) => {
            error!(error = error.to_string(), "failed to verify password");
            Err(error::INTERNAL)
        }
    }
}
