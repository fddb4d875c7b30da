//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Federated Sign In
// ============================================================================

/// Federated sign in request, relayed from the provider callback
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedSignInRequest {
    /// Provider-assigned subject identifier
    pub federated_id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

// ============================================================================
// User Info
// ============================================================================

/// Public view of an account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    /// Unix epoch milliseconds
    pub created_at: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.as_i64(),
            email: user.email.as_str().to_string(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at.timestamp_millis(),
        }
    }
}

// ============================================================================
// Generic Message
// ============================================================================

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
