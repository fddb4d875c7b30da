//! Value Object Module

pub mod email;
pub mod token_claims;
pub mod user_id;
pub mod user_password;
