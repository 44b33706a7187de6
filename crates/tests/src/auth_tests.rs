use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

fn credentials(email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password })
}

#[tokio::test]
async fn login_sets_both_cookies_and_stores_hashed_refresh_token() {
    let (app, store) = test_app();
    store.add_login_user(1, "staff", Some("attorney"));

    let res = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(credentials(&user_email(1), PASSWORD)),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["email"], user_email(1));
    assert_eq!(res.body["user"]["staff_role"], "attorney");
    assert!(res.body["access_token"].as_str().is_some());

    let cookies = res.set_cookies();
    assert!(cookies.iter().any(|c| c.starts_with("casedesk_access=") && c.contains("HttpOnly")));
    assert!(cookies.iter().any(|c| c.starts_with("casedesk_refresh=") && c.contains("HttpOnly")));

    let tokens = store.refresh_tokens(1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_hash.len(), 64);
}

#[tokio::test]
async fn login_email_is_case_insensitive() {
    let (app, store) = test_app();
    store.add_login_user(1, "admin", None);

    let res = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(credentials(&user_email(1).to_uppercase(), PASSWORD)),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let (app, store) = test_app();
    store.add_login_user(1, "staff", None);

    let res = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(credentials(&user_email(1), "wrong-password")),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["message"], "Invalid email or password");
    assert!(res.set_cookies().is_empty());
}

#[tokio::test]
async fn unknown_email_gets_the_same_answer() {
    let (app, _store) = test_app();

    let res = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(credentials("nobody@firm.test", PASSWORD)),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn account_without_password_cannot_sign_in() {
    let (app, store) = test_app();
    store.add_user(1, "staff", None);

    let res = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(credentials(&user_email(1), PASSWORD)),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_credentials_report_field_errors() {
    let (app, _store) = test_app();

    let res = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(credentials("not-an-email", "")),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["kind"], "ValidationError");
    assert_eq!(res.body["field_errors"]["email"], "Valid email is required");
    assert_eq!(res.body["field_errors"]["password"], "Password is required");
}

#[tokio::test]
async fn logout_revokes_sessions_and_clears_cookies() {
    let (app, store) = test_app();
    store.add_user(1, "staff", Some("secretary"));
    let refresh = refresh_cookie(&store, 1, "staff").await;
    let cookie = format!("{}; {}", session_cookie(1, "staff"), refresh);

    let res = request(&app, Method::POST, "/api/auth/logout", Some(&cookie), None).await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.clears_auth_cookies());
    assert_eq!(store.active_refresh_tokens(1), 0);
}

#[tokio::test]
async fn logout_without_session_still_clears_cookies() {
    let (app, _store) = test_app();

    let res = request(&app, Method::POST, "/api/auth/logout", None, None).await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.clears_auth_cookies());
}

#[tokio::test]
async fn signed_in_session_opens_case_detail() {
    let (app, store) = test_app();
    store.add_login_user(1, "staff", Some("paralegal"));
    store.add_case(CASE_ID, "123", "open");

    let login = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(credentials(&user_email(1), PASSWORD)),
    )
    .await;
    let token = login.body["access_token"].as_str().unwrap();

    let res = get(
        &app,
        &format!("/api/cases/{CASE_ID}/detail"),
        Some(&format!("casedesk_access={token}")),
    )
    .await;

    assert_eq!(res.body["outcome"], "loaded");
    assert_eq!(res.body["detail"]["viewer"]["staff_role"], "paralegal");
}
