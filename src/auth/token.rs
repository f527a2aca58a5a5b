use crate::{error, Result};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TOKEN_LIFETIME_SECS: i64 = 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;

    validation
});

/// Issues and verifies the access tokens. Keys are derived from the
/// configured secret once, at construction.
pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Jwt {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue_token(&self, user_id: Uuid) -> Result<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
        };

        match jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding) {
            Ok(token) => Ok(token),
            Err(error) => {
                error!(error = error.to_string(), "failed to sign token");
                Err(error::INTERNAL)
            }
        }
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(error) => {
                warn!(error = error.to_string(), "tried invalid token");
                Err(error::COULD_NOT_GET_CLAIMS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let jwt = Jwt::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = jwt.issue_token(user_id).unwrap();
        let claims = jwt.get_claims(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp, claims.iat + TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let jwt = Jwt::new("test-secret");
        let other = Jwt::new("other-secret");

        let token = jwt.issue_token(Uuid::new_v4()).unwrap();

        assert!(other.get_claims(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = Jwt::new("test-secret");

        let iat = Utc::now().timestamp() - 2 * TOKEN_LIFETIME_SECS;
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(jwt.get_claims(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let jwt = Jwt::new("test-secret");

        assert!(jwt.get_claims("test.test.test").is_err());
    }
}
