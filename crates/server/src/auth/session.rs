//! Sign-in and sign-out against a [`SessionStore`].

use shared_types::{AppError, AuthUser, LoginRequest};

use super::{jwt, password};
use crate::store::SessionStore;

/// Tokens issued by a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: AuthUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Verify email/password and issue a session. The refresh token is stored
/// only as a hash.
#[tracing::instrument(skip(store, req), fields(email = %req.email))]
pub async fn sign_in<S: SessionStore>(store: &S, req: &LoginRequest) -> Result<SignedIn, AppError> {
    let invalid = || AppError::unauthorized("Invalid email or password");

    let record = store.find_login(&req.email).await?.ok_or_else(invalid)?;
    let hash = record.password_hash.as_deref().ok_or_else(invalid)?;

    let valid = password::verify_password(&req.password, hash)
        .map_err(|e| AppError::internal(e.to_string()))?;
    if !valid {
        return Err(invalid());
    }

    let access_token = jwt::create_access_token(record.id, &record.email, &record.role)
        .map_err(|e| AppError::internal(e.to_string()))?;
    let (refresh_token, expires_at) =
        jwt::create_refresh_token(record.id, &record.email, &record.role)
            .map_err(|e| AppError::internal(e.to_string()))?;

    store
        .insert_refresh_token(record.id, &jwt::hash_token(&refresh_token), expires_at)
        .await?;

    tracing::info!(user_id = record.id, "User signed in");

    Ok(SignedIn {
        user: AuthUser::from(record),
        access_token,
        refresh_token,
    })
}

/// Terminate every session of the user. Cookie clearing is the caller's job.
pub async fn sign_out<S: SessionStore>(store: &S, user_id: i64) -> Result<(), AppError> {
    let revoked = store.revoke_user_sessions(user_id).await?;
    tracing::info!(user_id, revoked, "User signed out");
    Ok(())
}
