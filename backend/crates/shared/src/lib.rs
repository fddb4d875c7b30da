//! Shared kernel for the workspace
//!
//! Home of the vocabulary every crate agrees on:
//! - Unified error type and result alias ([`error`])
//! - Typed entity identifiers ([`id`])
//!
//! Nothing lands here unless it is stable and means the same thing in
//! every domain.

pub mod error {
    pub mod app_error;
    pub mod kind;
    #[cfg(feature = "axum")]
    pub mod response;
}
pub mod id;
