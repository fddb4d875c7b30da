//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentUser, RefreshGrant, require_access_session, require_refresh_session};
pub use router::{auth_router, auth_router_generic};
