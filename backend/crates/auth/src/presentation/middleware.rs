//! Auth Middleware
//!
//! Route guards for the two token kinds. Each protected route picks its
//! guard statically; there is no runtime guard selection.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::AuthenticateUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::token_claims::TokenKind;
use crate::presentation::handlers::AuthAppState;

/// Verified access-token subject, stored in request extensions
#[derive(Clone)]
pub struct CurrentUser {
    pub user: User,
}

/// Verified refresh grant, stored in request extensions
///
/// Carries the presented token so the rotation swaps exactly the token
/// that passed the guard.
#[derive(Clone)]
pub struct RefreshGrant {
    pub user: User,
    pub presented_token: String,
}

/// Guard requiring a valid access token
pub async fn require_access_session<R>(
    state: AuthAppState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        AuthenticateUseCase::new(state.repo.clone(), state.codec.clone(), state.config.clone());

    let context = match use_case.execute(TokenKind::Access, req.headers()).await {
        Ok(context) => context,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentUser { user: context.user });

    Ok(next.run(req).await)
}

/// Guard requiring a valid, current refresh token
pub async fn require_refresh_session<R>(
    state: AuthAppState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        AuthenticateUseCase::new(state.repo.clone(), state.codec.clone(), state.config.clone());

    let context = match use_case.execute(TokenKind::Refresh, req.headers()).await {
        Ok(context) => context,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(RefreshGrant {
        user: context.user,
        presented_token: context.presented_token,
    });

    Ok(next.run(req).await)
}
