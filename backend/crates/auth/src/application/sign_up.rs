//! Sign Up Use Case
//!
//! Creates a new local account. No tokens are issued here; the client
//! signs in afterwards.

use std::sync::Arc;

use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: i64,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let email =
            Email::new(input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Check for an existing account before doing any password work
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::AlreadyRegistered);
        }

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password)?;

        let user = self
            .repo
            .create(NewUser::local(email, input.name, password_hash))
            .await?;

        tracing::info!(user_id = %user.user_id, "User signed up");

        Ok(SignUpOutput {
            user_id: user.user_id.as_i64(),
        })
    }
}
