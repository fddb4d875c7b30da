//! Sign In Use Case
//!
//! Authenticates a local account and issues a credential pair.

use std::sync::Arc;

use crate::application::issue_tokens::{TokenIssuer, TokenPair};
use crate::application::token_codec::TokenCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub tokens: TokenPair,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { repo, codec }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Account existence is checked first; every failure from here on
        // reads the same to the client
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Federated-only accounts have no password to check
        let password_hash = user
            .password_hash
            .as_ref()
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let issuer = TokenIssuer::new(self.repo.clone(), self.codec.clone());
        let tokens = issuer.issue(&user).await?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { user, tokens })
    }
}
