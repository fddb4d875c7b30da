//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user; the store assigns the id
    async fn create(&self, user: NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by federated identity
    async fn find_by_federated_id(&self, federated_id: &str) -> AuthResult<Option<User>>;

    /// Update profile and identity-link fields
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Overwrite the refresh-token slot
    ///
    /// Returns `false` when the user row no longer exists.
    async fn store_refresh_token(&self, user_id: &UserId, token: &str) -> AuthResult<bool>;

    /// Replace the refresh-token slot only if it still holds `previous`
    ///
    /// Returns `false` when the slot changed underneath the caller; of
    /// two concurrent rotations presenting the same token, exactly one
    /// sees `true`.
    async fn rotate_refresh_token(
        &self,
        user_id: &UserId,
        previous: &str,
        next: &str,
    ) -> AuthResult<bool>;

    /// Empty the refresh-token slot; idempotent
    async fn clear_refresh_token(&self, user_id: &UserId) -> AuthResult<()>;
}
