//! Token Codec
//!
//! Signs and verifies the stateless credentials (HS256). This is the
//! only component that holds the signing secret.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::token_claims::{TokenClaims, TokenKind};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Why a token failed verification
///
/// Callers reject all three variants the same way; the split exists for
/// logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token is expired")]
    Expired,
}

/// Signs and verifies access/refresh tokens
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    /// Build a codec from the app config
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // A token is invalid the second after `exp`, no grace window
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            access_ttl: config.access_token_ttl,
            refresh_ttl: config.refresh_token_ttl,
        }
    }

    /// Sign a token for `user_id` with the lifetime of its kind
    ///
    /// Refresh tokens never carry an email, whatever the caller passes.
    pub fn sign(
        &self,
        kind: TokenKind,
        user_id: &UserId,
        email: Option<&Email>,
    ) -> AuthResult<String> {
        let (ttl, email) = match kind {
            TokenKind::Access => (self.access_ttl, email.map(|e| e.as_str().to_string())),
            TokenKind::Refresh => (self.refresh_ttl, None),
        };

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: user_id.as_i64(),
            email,
            kind,
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })
    }
}
