use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::*;

#[tokio::test]
async fn health_reports_connected_store() {
    let (app, _store) = test_app();

    let res = get(&app, "/health", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["db"], "connected");
}

#[tokio::test]
async fn health_stays_up_when_store_is_down() {
    let (app, store) = test_app();
    store.fail_reads();

    let res = get(&app, "/health", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["db"], "error: connection refused");
}
