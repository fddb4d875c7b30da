//! Sign Out Use Case
//!
//! Revokes the refresh credential for an account.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SignOutUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Clear the refresh slot; safe to repeat
    ///
    /// Outstanding access tokens keep working until they expire. Only
    /// the refresh path is cut here.
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<()> {
        self.repo.clear_refresh_token(user_id).await?;

        tracing::info!(user_id = %user_id, "User signed out");

        Ok(())
    }
}
