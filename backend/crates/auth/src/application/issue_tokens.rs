//! Token Issuance
//!
//! Mints access/refresh pairs. The refresh reference is persisted
//! before any token leaves the process, so a pair the client holds is
//! always backed by the store.

use std::sync::Arc;

use crate::application::token_codec::TokenCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::token_claims::TokenKind;
use crate::error::{AuthError, AuthResult, RejectReason};

/// Freshly minted credential pair
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Token issuer
pub struct TokenIssuer<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R> TokenIssuer<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { repo, codec }
    }

    /// Mint a pair and overwrite the refresh slot unconditionally
    ///
    /// Every login is a rotation point: whatever refresh token existed
    /// before stops working here.
    pub async fn issue(&self, user: &User) -> AuthResult<TokenPair> {
        let pair = self.mint(user)?;

        let stored = self
            .repo
            .store_refresh_token(&user.user_id, &pair.refresh_token)
            .await?;
        if !stored {
            return Err(AuthError::UserVanished);
        }

        Ok(pair)
    }

    /// Mint a pair, swapping the refresh slot only if it still holds
    /// `previous`
    ///
    /// Of two concurrent rotations presenting the same token, exactly
    /// one wins; the loser is treated as token reuse.
    pub async fn rotate(&self, user: &User, previous: &str) -> AuthResult<TokenPair> {
        let pair = self.mint(user)?;

        let swapped = self
            .repo
            .rotate_refresh_token(&user.user_id, previous, &pair.refresh_token)
            .await?;
        if !swapped {
            return Err(AuthError::Rejected(RejectReason::Reused));
        }

        Ok(pair)
    }

    fn mint(&self, user: &User) -> AuthResult<TokenPair> {
        let access_token = self
            .codec
            .sign(TokenKind::Access, &user.user_id, Some(&user.email))?;
        let refresh_token = self.codec.sign(TokenKind::Refresh, &user.user_id, None)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
