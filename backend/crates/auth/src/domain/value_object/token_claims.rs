//! Token Claims Value Object
//!
//! Claims carried by signed credentials. Access tokens carry the subject
//! and email; refresh tokens carry minimal claims (no email).

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_id::UserId;

/// Which credential a token represents
///
/// Doubles as the guard selector: routes statically pick the kind they
/// require, there is no dynamic guard dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[display("access")]
    Access,
    #[display("refresh")]
    Refresh,
}

/// Claims embedded in a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject user id
    pub sub: i64,
    /// Email, present on access tokens only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Token kind
    pub kind: TokenKind,
    /// Unique token id, keeps tokens minted in the same second distinct
    pub jti: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl TokenClaims {
    /// Typed subject id
    pub fn user_id(&self) -> UserId {
        UserId::from_i64(self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(kind: TokenKind, email: Option<&str>) -> TokenClaims {
        TokenClaims {
            sub: 42,
            email: email.map(String::from),
            kind,
            jti: "token-id".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        }
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TokenKind::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::Refresh).unwrap(),
            "\"refresh\""
        );
    }

    #[test]
    fn test_refresh_claims_omit_email() {
        let json = serde_json::to_string(&claims(TokenKind::Refresh, None)).unwrap();
        assert!(!json.contains("email"));
    }

    #[test]
    fn test_access_claims_carry_email() {
        let json = serde_json::to_string(&claims(TokenKind::Access, Some("user@example.com"))).unwrap();
        assert!(json.contains("\"email\":\"user@example.com\""));
    }

    #[test]
    fn test_claims_roundtrip() {
        let original = claims(TokenKind::Access, Some("user@example.com"));
        let json = serde_json::to_string(&original).unwrap();
        let parsed: TokenClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.user_id().as_i64(), 42);
    }
}
