use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::{self, hash_token, validate_access_token, validate_refresh_token, Claims};
use crate::db::AppState;
use crate::store::SessionStore;

/// Permissive auth middleware.
///
/// On each request:
/// 1. Validates the access token from cookies (or Bearer header fallback)
/// 2. If missing or invalid, attempts a transparent refresh from the refresh cookie
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 4. After the handler runs, applies refreshed or scheduled cookies
///
/// Never rejects; handlers decide what a missing session means.
pub async fn auth_middleware<S: SessionStore>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let mut refreshed: Option<(String, String)> = None;

    let claims = cookies::extract_access_token(&headers)
        .and_then(|token| validate_access_token(&token).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
        }
        None => {
            if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
                if let Some((claims, access, refresh)) =
                    try_transparent_refresh(&state.store, &refresh_token).await
                {
                    req.extensions_mut().insert(claims);
                    refreshed = Some((access, refresh));
                }
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some((access, refresh)) = refreshed {
        cookies::set_auth_cookies(response.headers_mut(), &access, &refresh);
    }

    // A scheduled action (sign-in or sign-out) wins over the refresh above.
    match cookie_slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token),
        Some(PendingCookieAction::Clear) => cookies::clear_auth_cookies(response.headers_mut()),
        None => {}
    }

    response
}

/// Rotate a refresh token: the presented token is revoked and a new pair
/// issued. Returns the fresh claims and the new (access, refresh) tokens.
async fn try_transparent_refresh<S: SessionStore>(
    store: &S,
    refresh_token: &str,
) -> Option<(Claims, String, String)> {
    let claims = validate_refresh_token(refresh_token).ok()?;

    let stored = store
        .find_refresh_token(claims.sub, &hash_token(refresh_token))
        .await
        .ok()
        .flatten()?;

    if stored.revoked {
        tracing::warn!(user_id = claims.sub, "Revoked refresh token presented");
        return None;
    }

    if let Err(e) = store.revoke_refresh_token(stored.id).await {
        tracing::error!(user_id = claims.sub, error = %e, "Failed to revoke rotated refresh token");
        return None;
    }

    let new_access = jwt::create_access_token(claims.sub, &claims.email, &claims.role).ok()?;
    let (new_refresh, expires_at) =
        jwt::create_refresh_token(claims.sub, &claims.email, &claims.role).ok()?;

    store
        .insert_refresh_token(claims.sub, &hash_token(&new_refresh), expires_at)
        .await
        .ok()?;

    let new_claims = validate_access_token(&new_access).ok()?;
    Some((new_claims, new_access, new_refresh))
}
