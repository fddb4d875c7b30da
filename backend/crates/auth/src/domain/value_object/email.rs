//! Email Value Object
//!
//! A lightly validated email address. The check here only rejects
//! obvious garbage; proof of ownership comes from the confirmation
//! mail, not from parsing.
//!
//! Case is preserved exactly as given. Lookups compare against the
//! stored form, so `User@Example.com` and `user@example.com` are two
//! different accounts.

use kernel::error::app_error::{AppError, AppResult};

/// RFC 5321 ceiling for the full address
const EMAIL_MAX_LENGTH: usize = 254;

/// Longest allowed local part (before the `@`)
const LOCAL_MAX_LENGTH: usize = 64;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Trim surrounding whitespace and validate the shape
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }
        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }
        if !has_valid_shape(&email) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self(email))
    }

    /// Wrap a value loaded from the database, no re-validation
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// The address as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `local@domain` with a plausible domain
///
/// The domain must have at least two labels, every label non-empty,
/// built from ASCII alphanumerics and hyphens, and no label may start
/// or end with a hyphen.
fn has_valid_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > LOCAL_MAX_LENGTH {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in [
            "",
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@example..com",
            "user@-example.com",
        ] {
            assert!(Email::new(bad).is_err(), "should reject {:?}", bad);
        }
    }

    #[test]
    fn test_case_is_preserved() {
        // Lookups are case-sensitive against the stored form
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
        assert_ne!(email, Email::new("user@example.com").unwrap());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let email = Email::new("  user@example.com  ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }
}
