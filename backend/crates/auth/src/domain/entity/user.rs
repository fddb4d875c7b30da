//! User Entity
//!
//! Account record combining the local credential, the federated identity
//! link, and the single active refresh-token slot.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
///
/// `refresh_token` is the single active refresh credential for the
/// account; `None` means no refresh is possible until the next login.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: UserId,
    /// Unique email, stored and matched case-sensitively
    pub email: Email,
    /// Display name
    pub name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Identifier asserted by the federated provider
    pub federated_id: Option<String>,
    /// Argon2id hash, absent for federated-only accounts
    pub password_hash: Option<UserPassword>,
    /// Currently accepted refresh token
    pub refresh_token: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the account has a local password
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Check if the account is linked to a federated identity
    pub fn is_federated(&self) -> bool {
        self.federated_id.is_some()
    }

    /// Merge a federated assertion into this account
    ///
    /// Profile fields are overwritten with whatever the provider sent;
    /// the password hash is untouched and the federated id is only
    /// backfilled when absent.
    pub fn apply_federated_profile(
        &mut self,
        name: Option<String>,
        avatar_url: Option<String>,
        federated_id: &str,
    ) {
        self.name = name;
        self.avatar_url = avatar_url;
        if self.federated_id.is_none() {
            self.federated_id = Some(federated_id.to_string());
        }
        self.updated_at = Utc::now();
    }
}

/// New user data, before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub federated_id: Option<String>,
    pub password_hash: Option<UserPassword>,
}

impl NewUser {
    /// New local account with a password credential
    pub fn local(email: Email, name: Option<String>, password_hash: UserPassword) -> Self {
        Self {
            email,
            name,
            avatar_url: None,
            federated_id: None,
            password_hash: Some(password_hash),
        }
    }

    /// New account from a federated assertion, no local password
    pub fn federated(
        federated_id: String,
        email: Email,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            email,
            name,
            avatar_url,
            federated_id: Some(federated_id),
            password_hash: None,
        }
    }
}
