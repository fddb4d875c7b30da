//! Password hashing and verification
//!
//! Implements the NIST SP 800-63B memorized-secret rules on top of
//! Argon2id:
//! - NFKC normalization before any length check
//! - Length measured in Unicode code points, 8 to 128
//! - Memory-hard hashing with a fresh random salt per call
//! - Clear text wrapped in a zeroizing type that never leaves this module
//!
//! The PHC string produced here is the only password artifact that may
//! be persisted.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// NIST SP 800-63B: secrets SHALL be at least 8 characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// NIST SP 800-63B: secrets SHOULD be allowed up to at least 64;
/// capped at 128 to bound hashing cost
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Why a candidate password was refused before hashing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Failures in the hashing layer itself
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// A password as the user typed it, normalized and policy-checked
///
/// The inner string is zeroized when the value drops. The type is
/// deliberately not `Clone` and its `Debug` output is redacted, so the
/// clear text cannot wander into logs or copies.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
/// let hashed = password.hash().unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize with NFKC, then enforce the password policy
    ///
    /// Normalization comes first so that visually identical inputs
    /// (full-width vs half-width forms) hash to the same secret.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();
        validate_policy(&normalized)?;
        Ok(Self(normalized))
    }

    /// Skip validation. Test fixtures only.
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id and a fresh 16-byte salt
    ///
    /// Uses the `Argon2::default()` parameter set (Argon2id,
    /// m=19456 KiB, t=2, p=1), which matches the current OWASP
    /// recommendation.
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);
        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// An Argon2id hash in PHC string form, safe to persist
///
/// The PHC string carries the algorithm, parameters and salt, so
/// verification needs nothing beyond the stored string itself.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a PHC string loaded from storage
    ///
    /// The string is parsed up front so a corrupted row fails here,
    /// not at the first verification attempt.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// The PHC string to persist
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Check a clear text candidate against this hash
    ///
    /// Argon2 compares digests in constant time.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

/// Policy checks run on the NFKC-normalized string
fn validate_policy(normalized: &str) -> Result<(), PasswordPolicyError> {
    if normalized.trim().is_empty() {
        return Err(PasswordPolicyError::EmptyOrWhitespace);
    }

    // NIST counts code points, not bytes
    let length = normalized.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooLong {
            max: MAX_PASSWORD_LENGTH,
            actual: length,
        });
    }

    // Tab and newline are tolerated, other control characters are not
    if normalized
        .chars()
        .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
    {
        return Err(PasswordPolicyError::InvalidCharacter);
    }

    Ok(())
}
