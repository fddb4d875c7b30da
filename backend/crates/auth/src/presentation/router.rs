//! Auth Router

use axum::body::Body;
use axum::http::Request;
use axum::middleware::{Next, from_fn};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_codec::TokenCodec;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{require_access_session, require_refresh_session};

/// Create the auth router with the PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create the auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let codec = Arc::new(TokenCodec::new(&config));

    let state = AuthAppState {
        repo: Arc::new(repo),
        codec,
        config: Arc::new(config),
    };

    let public = Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/federated", post(handlers::federated_sign_in::<R>));

    let access_state = state.clone();
    let protected = Router::new()
        .route("/me", get(handlers::current_user))
        .route("/signout", post(handlers::sign_out::<R>))
        .route_layer(from_fn(move |req: Request<Body>, next: Next| {
            require_access_session(access_state.clone(), req, next)
        }));

    let refresh_state = state.clone();
    let refresh = Router::new()
        .route("/refresh", post(handlers::refresh::<R>))
        .route_layer(from_fn(move |req: Request<Body>, next: Next| {
            require_refresh_session(refresh_state.clone(), req, next)
        }));

    public.merge(protected).merge(refresh).with_state(state)
}
