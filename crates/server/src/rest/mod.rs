pub mod auth;
pub mod case;

use axum::{routing::{get, post}, Router};
use crate::db::AppState;
use crate::store::Store;

/// Build the REST API router over any store.
pub fn api_router<S: Store>() -> Router<AppState<S>> {
    Router::new()
        // Auth
        .route("/api/auth/login", post(auth::login::<S>))
        .route("/api/auth/logout", post(auth::logout::<S>))
        // Case detail
        .route("/api/cases/{id}/detail", get(case::get_case_detail::<S>))
        .route("/api/cases/{id}/documents", get(case::list_case_documents::<S>))
        .route("/api/cases/{id}", axum::routing::delete(case::delete_case::<S>))
}
