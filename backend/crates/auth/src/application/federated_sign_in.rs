//! Federated Sign In Use Case
//!
//! Reconciles a federated identity assertion with the local account
//! base and issues a credential pair. Accounts are correlated by email,
//! not by provider subject, so an existing local account absorbs the
//! federated identity instead of spawning a duplicate.

use std::sync::Arc;

use crate::application::issue_tokens::{TokenIssuer, TokenPair};
use crate::application::token_codec::TokenCodec;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Federated assertion, as relayed by the provider callback
pub struct FederatedSignInInput {
    pub federated_id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Federated sign in output
#[derive(Debug)]
pub struct FederatedSignInOutput {
    pub user: User,
    pub tokens: TokenPair,
    /// Whether a new account was created for this assertion
    pub created: bool,
}

/// Federated sign in use case
pub struct FederatedSignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R> FederatedSignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { repo, codec }
    }

    pub async fn execute(&self, input: FederatedSignInInput) -> AuthResult<FederatedSignInOutput> {
        // The email is the merge key; an assertion without one cannot be
        // correlated with anything
        let email =
            Email::new(input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let (user, created) = match self.repo.find_by_email(&email).await? {
            Some(mut user) => {
                user.apply_federated_profile(input.name, input.avatar_url, &input.federated_id);
                self.repo.update(&user).await?;
                (user, false)
            }
            None => {
                let user = self
                    .repo
                    .create(NewUser::federated(
                        input.federated_id,
                        email,
                        input.name,
                        input.avatar_url,
                    ))
                    .await?;
                (user, true)
            }
        };

        let issuer = TokenIssuer::new(self.repo.clone(), self.codec.clone());
        let tokens = issuer.issue(&user).await?;

        tracing::info!(user_id = %user.user_id, created, "User signed in via federated identity");

        Ok(FederatedSignInOutput {
            user,
            tokens,
            created,
        })
    }
}
