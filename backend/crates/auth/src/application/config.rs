//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::{CookieConfig, SameSite};

/// Access token cookie name
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Refresh token cookie name
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Path the refresh cookie is scoped to; only the rotation route ever
/// receives it
const REFRESH_COOKIE_PATH: &str = "/api/auth/refresh";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret (32 bytes); handed to the codec, read nowhere else
    pub token_secret: [u8; 32],
    /// Access token lifetime (1 hour)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (1 week)
    pub refresh_token_ttl: Duration,
    /// Access token cookie attributes
    pub access_cookie: CookieConfig,
    /// Refresh token cookie attributes
    pub refresh_cookie: CookieConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let access_token_ttl = Duration::from_secs(3600); // 1 hour
        let refresh_token_ttl = Duration::from_secs(7 * 24 * 3600); // 1 week

        Self {
            token_secret: [0u8; 32],
            access_token_ttl,
            refresh_token_ttl,
            access_cookie: CookieConfig {
                name: ACCESS_TOKEN_COOKIE.to_string(),
                secure: true,
                http_only: true,
                same_site: SameSite::Lax,
                path: "/".to_string(),
                max_age_secs: Some(access_token_ttl.as_secs() as i64),
            },
            refresh_cookie: CookieConfig {
                name: REFRESH_TOKEN_COOKIE.to_string(),
                secure: true,
                http_only: true,
                same_site: SameSite::Lax,
                path: REFRESH_COOKIE_PATH.to_string(),
                max_age_secs: Some(refresh_token_ttl.as_secs() as i64),
            },
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookies)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.access_cookie.secure = false;
        config.refresh_cookie.secure = false;
        config
    }
}
