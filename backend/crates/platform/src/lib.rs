//! Platform Crate - Technical Infrastructure
//!
//! Technical building blocks with no domain knowledge:
//! - [`cookie`] - `Set-Cookie` rendering and request cookie extraction
//! - [`crypto`] - random bytes and constant-time comparison
//! - [`password`] - Argon2id hashing under the NIST SP 800-63B policy

pub mod cookie;
pub mod crypto;
pub mod password;
