use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};

use shared_types::{AppError, AuthResponse, LoginRequest};

use crate::auth::cookies::{CookieSlot, PendingCookieAction};
use crate::auth::extractors::MaybeSession;
use crate::auth::session::{sign_in, sign_out};
use crate::db::AppState;
use crate::error_convert::ValidateRequest;
use crate::store::SessionStore;

// ---------------------------------------------------------------------------
// POST /api/auth/login
// ---------------------------------------------------------------------------

/// Sign in with email and password. Sets the auth cookies.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 401, description = "Invalid email or password", body = AppError),
        (status = 422, description = "Invalid request", body = AppError)
    ),
    tag = "auth"
)]
pub async fn login<S: SessionStore>(
    State(state): State<AppState<S>>,
    Extension(cookies): Extension<CookieSlot>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    body.validate_request()?;
    let signed_in = sign_in(&state.store, &body).await?;

    cookies.schedule(PendingCookieAction::Set {
        access_token: signed_in.access_token.clone(),
        refresh_token: signed_in.refresh_token,
    });

    Ok(Json(AuthResponse {
        user: signed_in.user,
        access_token: signed_in.access_token,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/auth/logout
// ---------------------------------------------------------------------------

/// Revoke the caller's sessions and clear the auth cookies.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Signed out")
    ),
    tag = "auth"
)]
pub async fn logout<S: SessionStore>(
    State(state): State<AppState<S>>,
    Extension(cookies): Extension<CookieSlot>,
    MaybeSession(session): MaybeSession,
) -> Result<StatusCode, AppError> {
    if let Some(session) = session {
        sign_out(&state.store, session.user_id).await?;
    }
    cookies.schedule(PendingCookieAction::Clear);
    Ok(StatusCode::NO_CONTENT)
}
