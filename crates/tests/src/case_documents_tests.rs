use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use crate::common::*;

fn documents_uri(id: &str) -> String {
    format!("/api/cases/{id}/documents")
}

#[tokio::test]
async fn staff_lists_documents_newest_first() {
    let (app, store) = test_app();
    store.add_user(1, "staff", Some("paralegal"));
    store.add_case(CASE_ID, "123", "open");
    store.add_document(CASE_ID, "intake.pdf", Utc.with_ymd_and_hms(2024, 11, 3, 8, 0, 0).unwrap());
    store.add_document(CASE_ID, "medical-records.pdf", Utc.with_ymd_and_hms(2024, 12, 1, 8, 0, 0).unwrap());
    store.add_document(MISSING_CASE_ID, "other.pdf", Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap());

    let res = get(&app, &documents_uri(CASE_ID), Some(&session_cookie(1, "staff"))).await;

    assert_eq!(res.status, StatusCode::OK);
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["file_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["medical-records.pdf", "intake.pdf"]);
    assert_eq!(res.body[0]["case_id"], CASE_ID);
}

#[tokio::test]
async fn case_without_documents_is_empty() {
    let (app, store) = test_app();
    store.add_user(1, "admin", None);
    store.add_case(CASE_ID, "123", "open");

    let res = get(&app, &documents_uri(CASE_ID), Some(&session_cookie(1, "admin"))).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, serde_json::json!([]));
}

#[tokio::test]
async fn non_staff_is_forbidden() {
    let (app, store) = test_app();
    store.add_user(5, "client", None);

    let res = get(&app, &documents_uri(CASE_ID), Some(&session_cookie(5, "client"))).await;

    assert_eq!(res.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn anonymous_is_unauthorized() {
    let (app, _store) = test_app();

    let res = get(&app, &documents_uri(CASE_ID), None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleting_a_case_drops_its_documents() {
    let (app, store) = test_app();
    store.add_user(1, "admin", None);
    store.add_case(CASE_ID, "123", "open");
    store.add_document(CASE_ID, "intake.pdf", Utc::now());
    let cookie = session_cookie(1, "admin");

    request(&app, axum::http::Method::DELETE, &format!("/api/cases/{CASE_ID}"), Some(&cookie), None).await;
    let res = get(&app, &documents_uri(CASE_ID), Some(&cookie)).await;

    assert_eq!(res.body, serde_json::json!([]));
}
