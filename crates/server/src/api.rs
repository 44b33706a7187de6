use dioxus::prelude::*;
use shared_types::{AuthUser, CaseDetailOutcome, CaseDocumentResponse, FeatureFlags};

#[cfg(feature = "server")]
use crate::db::get_store;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

// ── Session helpers for server functions ───────────────

/// The caller's session, if any.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
#[cfg(feature = "server")]
fn current_session() -> Option<shared_types::Session> {
    use crate::auth::{cookies, jwt};

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.session());
    }

    let token = cookies::extract_access_token(&parts.headers)?;
    jwt::validate_access_token(&token)
        .ok()
        .map(|claims| claims.session())
}

// ── Configuration ──────────────────────────────────────

/// Get the current feature flags (read from config.toml at startup).
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

// ── Auth ───────────────────────────────────────────────

/// Sign in with email and password. Cookies are set by the auth middleware.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, session};
    use shared_types::LoginRequest;

    let req = LoginRequest { email, password };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let store = get_store().await;
    let signed_in = session::sign_in(&store, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_auth_cookies(&signed_in.access_token, &signed_in.refresh_token);

    Ok(signed_in.user)
}

/// Revoke every session of the caller and clear the auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, session};

    if let Some(current) = current_session() {
        let store = get_store().await;
        session::sign_out(&store, current.user_id)
            .await
            .map_err(|e| e.into_server_fn_error())?;
    }

    cookies::schedule_clear_cookies();
    Ok(())
}

// ── Case detail ────────────────────────────────────────

/// Load the staff case-detail view for the route id.
///
/// Not-staff sessions come back `Unauthorized` with their sessions revoked
/// and cookies cleared; the page only has to navigate.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_case_detail(id: String) -> Result<CaseDetailOutcome, ServerFnError> {
    use crate::auth::cookies;
    use crate::case_detail::open_case_detail;

    let session = current_session();
    let store = get_store().await;

    let outcome = open_case_detail(&store, session.as_ref(), &id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if outcome == CaseDetailOutcome::Unauthorized {
        cookies::schedule_clear_cookies();
    }

    Ok(outcome)
}

/// Documents attached to a case, newest first. Staff only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_case_documents(case_id: String) -> Result<Vec<CaseDocumentResponse>, ServerFnError> {
    use crate::case_detail::list_documents_as;

    let store = get_store().await;
    let documents = list_documents_as(&store, current_session().as_ref(), &case_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(documents.into_iter().map(CaseDocumentResponse::from).collect())
}

/// Delete a case. The permission is checked again on the server.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_case(case_id: String) -> Result<(), ServerFnError> {
    use crate::case_detail::delete_case_as;

    let store = get_store().await;
    delete_case_as(&store, current_session().as_ref(), &case_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}
