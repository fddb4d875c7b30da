//! User Password Value Object
//!
//! Two states, two types: [`RawPassword`] is what the user typed,
//! [`UserPassword`] is the Argon2id hash that may be persisted. The
//! cryptography lives in `platform::password`; this module adds the
//! domain error mapping on top.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("MySecurePass123!".to_string()).unwrap();
//! let stored = UserPassword::from_raw(&raw).unwrap();
//! assert!(stored.verify(&raw));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

/// A candidate password from user input, already policy-checked
///
/// Wraps the zeroizing platform type, so the clear text is erased when
/// this value drops. Not `Clone`, `Debug` is redacted.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate user input against the password policy
    ///
    /// Policy violations come back as 400-level [`AppError`]s with a
    /// user-facing message and a suggested fix.
    pub fn new(raw: String) -> AppResult<Self> {
        match ClearTextPassword::new(raw) {
            Ok(clear_text) => Ok(Self(clear_text)),
            Err(policy_err) => Err(policy_violation(policy_err)),
        }
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

fn policy_violation(err: PasswordPolicyError) -> AppError {
    let action = match &err {
        PasswordPolicyError::TooShort { .. } => "Please choose a longer password",
        PasswordPolicyError::TooLong { .. } => "Please choose a shorter password",
        PasswordPolicyError::EmptyOrWhitespace => "Please enter a password",
        PasswordPolicyError::InvalidCharacter => "Please remove any control characters",
    };
    AppError::bad_request(err.to_string()).with_action(action)
}

/// A hashed password in PHC string form, ready for the database
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password for storage
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        let hashed = raw.inner().hash().map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            _ => AppError::internal("Unexpected error during password hashing"),
        })?;
        Ok(Self(hashed))
    }

    /// Rehydrate from a PHC string loaded from the database
    ///
    /// A hash that does not parse means the row is corrupt; that is a
    /// server-side problem, never the caller's.
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AppError::internal("Invalid password hash in database"))?;
        Ok(Self(hashed))
    }

    /// The PHC string to persist
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Check a raw password against this hash in constant time
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}
