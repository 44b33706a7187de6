use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const ACCESS_COOKIE: &str = "casedesk_access";
pub const REFRESH_COOKIE: &str = "casedesk_refresh";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

fn auth_cookie(name: &'static str, value: &str, max_age: cookie::time::Duration) -> HeaderValue {
    render_cookie(name, value, max_age, cookie_domain().as_deref())
}

/// Renders the Set-Cookie value. A domain that cannot appear in a header
/// is dropped with a warning, leaving a host-only cookie.
fn render_cookie(
    name: &'static str,
    value: &str,
    max_age: cookie::time::Duration,
    domain: Option<&str>,
) -> HeaderValue {
    let cookie = Cookie::build((name, value.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure())
        .build();

    if let Some(domain) = domain {
        let mut scoped = cookie.clone();
        scoped.set_domain(domain.to_string());
        match HeaderValue::from_str(&scoped.to_string()) {
            Ok(v) => return v,
            Err(_) => tracing::warn!(domain, "COOKIE_DOMAIN is not a valid header value; using a host-only cookie"),
        }
    }

    // Cookie names are constants and JWTs are URL-safe base64, so the
    // rendered header is always visible ASCII.
    HeaderValue::from_str(&cookie.to_string()).expect("cookie header value should be valid")
}

/// Set-Cookie value for the access token.
pub fn build_access_cookie(token: &str, max_age_minutes: i64) -> HeaderValue {
    auth_cookie(
        ACCESS_COOKIE,
        token,
        cookie::time::Duration::seconds(max_age_minutes * 60),
    )
}

/// Set-Cookie value for the refresh token.
pub fn build_refresh_cookie(token: &str, max_age_days: i64) -> HeaderValue {
    auth_cookie(
        REFRESH_COOKIE,
        token,
        cookie::time::Duration::seconds(max_age_days * 86400),
    )
}

/// Set-Cookie values that expire both auth cookies.
pub fn build_clear_cookies() -> (HeaderValue, HeaderValue) {
    (
        auth_cookie(ACCESS_COOKIE, "", cookie::time::Duration::ZERO),
        auth_cookie(REFRESH_COOKIE, "", cookie::time::Duration::ZERO),
    )
}

/// Access token from the cookie, or from a Bearer header for REST clients.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

/// Append both auth cookies using the configured JWT lifetimes.
pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    headers.append(
        header::SET_COOKIE,
        build_access_cookie(access_token, jwt::access_token_expiry_minutes()),
    );
    headers.append(
        header::SET_COOKIE,
        build_refresh_cookie(refresh_token, jwt::refresh_token_expiry_days()),
    );
}

pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    let (access, refresh) = build_clear_cookies();
    headers.append(header::SET_COOKIE, access);
    headers.append(header::SET_COOKIE, refresh);
}

/// Cookie change requested by a server function, applied by the auth
/// middleware once the response exists.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Per-request slot shared between the middleware and server functions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Ask the middleware to set auth cookies on this server function's response.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    schedule(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    });
}

/// Ask the middleware to clear auth cookies on this server function's response.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}
