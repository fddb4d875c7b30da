//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    FederatedSignInInput, FederatedSignInUseCase, SignInInput, SignInUseCase, SignOutUseCase,
    SignUpInput, SignUpUseCase, TokenCodec, TokenIssuer, TokenPair,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    FederatedSignInRequest, MessageResponse, SignInRequest, SignUpRequest, UserResponse,
};
use crate::presentation::middleware::{CurrentUser, RefreshGrant};

/// Shared state for auth handlers and middleware
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<TokenCodec>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        email: req.email,
        name: req.name,
        password: req.password,
    };

    use_case.execute(input).await?;

    // No tokens on signup; the client signs in next
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.codec.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::OK,
        session_cookies(&state.config, &output.tokens),
        Json(UserResponse::from(&output.user)),
    ))
}

// ============================================================================
// Federated Sign In
// ============================================================================

/// POST /api/auth/federated
pub async fn federated_sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<FederatedSignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = FederatedSignInUseCase::new(state.repo.clone(), state.codec.clone());

    let input = FederatedSignInInput {
        federated_id: req.federated_id,
        email: req.email,
        name: req.name,
        avatar_url: req.avatar_url,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::OK,
        session_cookies(&state.config, &output.tokens),
        Json(UserResponse::from(&output.user)),
    ))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
///
/// Runs behind the refresh guard; the grant carries the verified user
/// and the exact token that passed the guard.
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Extension(grant): Extension<RefreshGrant>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let issuer = TokenIssuer::new(state.repo.clone(), state.codec.clone());

    let tokens = issuer.rotate(&grant.user, &grant.presented_token).await?;

    Ok((
        StatusCode::OK,
        session_cookies(&state.config, &tokens),
        Json(UserResponse::from(&grant.user)),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.repo.clone());

    use_case.execute(&current.user.user_id).await?;

    Ok((
        StatusCode::OK,
        clear_session_cookies(&state.config),
        Json(MessageResponse {
            message: "Signed out".to_string(),
        }),
    ))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
pub async fn current_user(Extension(current): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(UserResponse::from(&current.user))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Set-Cookie pair for a freshly issued credential pair
fn session_cookies(
    config: &AuthConfig,
    tokens: &TokenPair,
) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            header::SET_COOKIE,
            config.access_cookie.build_set_cookie(&tokens.access_token),
        ),
        (
            header::SET_COOKIE,
            config.refresh_cookie.build_set_cookie(&tokens.refresh_token),
        ),
    ])
}

/// Set-Cookie pair that expires both session cookies
fn clear_session_cookies(config: &AuthConfig) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (header::SET_COOKIE, config.access_cookie.build_delete_cookie()),
        (header::SET_COOKIE, config.refresh_cookie.build_delete_cookie()),
    ])
}
