//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod federated_sign_in;
pub mod issue_tokens;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod token_codec;

// Re-exports
pub use authenticate::{AuthenticateUseCase, SessionContext};
pub use config::AuthConfig;
pub use federated_sign_in::{FederatedSignInInput, FederatedSignInOutput, FederatedSignInUseCase};
pub use issue_tokens::{TokenIssuer, TokenPair};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token_codec::{TokenCodec, TokenError};
