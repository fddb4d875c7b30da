//! Session Authentication Use Case
//!
//! One state machine behind both route guards: read the cookie for the
//! requested token kind, verify it, load the subject, and for refresh
//! tokens compare against the stored slot.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::extract_cookie;
use platform::crypto::constant_time_eq;

use crate::application::config::AuthConfig;
use crate::application::token_codec::TokenCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::token_claims::TokenKind;
use crate::error::{AuthError, AuthResult, RejectReason};

/// Authenticated request context
#[derive(Debug)]
pub struct SessionContext {
    pub user: User,
    /// The exact token string the client presented
    pub presented_token: String,
}

/// Session authentication use case
pub struct AuthenticateUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, codec: Arc<TokenCodec>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            codec,
            config,
        }
    }

    /// Authenticate a request against the given token kind
    ///
    /// Every rejection carries a [`RejectReason`] that ends up in the
    /// logs; the client sees one generic unauthorized response.
    pub async fn execute(&self, kind: TokenKind, headers: &HeaderMap) -> AuthResult<SessionContext> {
        let cookie_name = match kind {
            TokenKind::Access => &self.config.access_cookie.name,
            TokenKind::Refresh => &self.config.refresh_cookie.name,
        };

        let token = extract_cookie(headers, cookie_name)
            .ok_or(AuthError::Rejected(RejectReason::NoToken))?;

        let claims = self.codec.verify(&token).map_err(|e| {
            tracing::debug!(kind = %kind, error = %e, "Token verification failed");
            AuthError::Rejected(RejectReason::InvalidToken)
        })?;

        // A refresh token on the access route (or vice versa) is invalid
        if claims.kind != kind {
            return Err(AuthError::Rejected(RejectReason::InvalidToken));
        }

        let user = match self.repo.find_by_id(&claims.user_id()).await? {
            Some(user) => user,
            None => {
                let reason = match kind {
                    TokenKind::Access => RejectReason::UserGone,
                    TokenKind::Refresh => RejectReason::Revoked,
                };
                return Err(AuthError::Rejected(reason));
            }
        };

        if kind == TokenKind::Refresh {
            // An empty slot rejects every refresh token, including ones
            // that would otherwise verify
            let stored = user
                .refresh_token
                .as_deref()
                .ok_or(AuthError::Rejected(RejectReason::Revoked))?;

            if !constant_time_eq(stored.as_bytes(), token.as_bytes()) {
                return Err(AuthError::Rejected(RejectReason::Reused));
            }
        }

        Ok(SessionContext {
            user,
            presented_token: token,
        })
    }
}
