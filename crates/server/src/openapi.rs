use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthResponse, AuthUser, CaseDetail, CaseDetailOutcome,
    CaseDocumentResponse, CaseResponse, LoginRequest, Viewer,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;
use crate::store::{PgStore, Store};

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::auth::login,
        rest::auth::logout,
        rest::case::get_case_detail,
        rest::case::list_case_documents,
        rest::case::delete_case,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind,
        LoginRequest, AuthResponse, AuthUser,
        CaseResponse, CaseDetail, CaseDetailOutcome, Viewer,
        CaseDocumentResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "auth", description = "Sign-in and sign-out"),
        (name = "cases", description = "Staff case detail, documents and deletion"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Casedesk API",
        description = "Staff legal case management API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// REST API and health check over any store, with state applied.
pub fn router_with_store<S: Store>(store: S) -> Router {
    Router::new()
        .merge(rest::api_router::<S>())
        .route("/health", axum::routing::get(health::health_check::<S>))
        .with_state(AppState::new(store))
}

/// Build an Axum router that serves the REST API at `/api/*` and,
/// when enabled, the API docs at `/docs`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let router = router_with_store(PgStore::new(pool));

    if crate::config::feature_flags().api_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
