use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::*;

fn delete_uri(id: &str) -> String {
    format!("/api/cases/{id}")
}

#[tokio::test]
async fn admin_deletes_case() {
    let (app, store) = test_app();
    store.add_user(1, "admin", None);
    store.add_case(CASE_ID, "123", "open");

    let res = request(
        &app,
        Method::DELETE,
        &delete_uri(CASE_ID),
        Some(&session_cookie(1, "admin")),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(!store.has_case(CASE_ID));
}

#[tokio::test]
async fn secretary_deletes_case() {
    let (app, store) = test_app();
    store.add_user(2, "staff", Some("secretary"));
    store.add_case(CASE_ID, "123", "open");

    let res = request(
        &app,
        Method::DELETE,
        &delete_uri(CASE_ID),
        Some(&session_cookie(2, "staff")),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn paralegal_is_forbidden() {
    let (app, store) = test_app();
    store.add_user(3, "staff", Some("paralegal"));
    store.add_case(CASE_ID, "123", "open");

    let res = request(
        &app,
        Method::DELETE,
        &delete_uri(CASE_ID),
        Some(&session_cookie(3, "staff")),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body["kind"], "Forbidden");
    assert!(store.has_case(CASE_ID));
}

#[tokio::test]
async fn token_role_does_not_override_user_row() {
    let (app, store) = test_app();
    store.add_user(4, "client", None);
    store.add_case(CASE_ID, "123", "open");

    let res = request(
        &app,
        Method::DELETE,
        &delete_uri(CASE_ID),
        Some(&session_cookie(4, "admin")),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert!(store.has_case(CASE_ID));
}

#[tokio::test]
async fn anonymous_delete_is_unauthorized() {
    let (app, store) = test_app();
    store.add_case(CASE_ID, "123", "open");

    let res = request(&app, Method::DELETE, &delete_uri(CASE_ID), None, None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert!(store.has_case(CASE_ID));
}

#[tokio::test]
async fn unknown_case_is_not_found() {
    let (app, store) = test_app();
    store.add_user(1, "admin", None);

    let res = request(
        &app,
        Method::DELETE,
        &delete_uri(MISSING_CASE_ID),
        Some(&session_cookie(1, "admin")),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let (app, store) = test_app();
    store.add_user(1, "admin", None);

    let res = request(
        &app,
        Method::DELETE,
        &delete_uri("123"),
        Some(&session_cookie(1, "admin")),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleted_case_then_reads_as_not_found() {
    let (app, store) = test_app();
    store.add_user(1, "admin", None);
    store.add_case(CASE_ID, "123", "open");
    let cookie = session_cookie(1, "admin");

    request(&app, Method::DELETE, &delete_uri(CASE_ID), Some(&cookie), None).await;
    let res = get(&app, &format!("/api/cases/{CASE_ID}/detail"), Some(&cookie)).await;

    assert_eq!(res.body["outcome"], "not_found");
}
