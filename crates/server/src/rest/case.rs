use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use shared_types::{AppError, CaseDetailOutcome, CaseDocumentResponse};

use crate::auth::cookies::{CookieSlot, PendingCookieAction};
use crate::auth::extractors::MaybeSession;
use crate::case_detail::{delete_case_as, list_documents_as, open_case_detail};
use crate::db::AppState;
use crate::store::{CaseRecords, Store};

// ---------------------------------------------------------------------------
// GET /api/cases/{id}/detail
// ---------------------------------------------------------------------------

/// Load the staff case-detail view.
///
/// Always 200 with a tagged outcome; an `unauthorized` outcome also signs
/// the caller out and clears the auth cookies.
#[utoipa::path(
    get,
    path = "/api/cases/{id}/detail",
    params(("id" = String, Path, description = "Case UUID")),
    responses(
        (status = 200, description = "Load outcome", body = CaseDetailOutcome),
        (status = 500, description = "Store failure", body = AppError)
    ),
    tag = "cases"
)]
pub async fn get_case_detail<S: Store>(
    State(state): State<AppState<S>>,
    Extension(cookies): Extension<CookieSlot>,
    MaybeSession(session): MaybeSession,
    Path(id): Path<String>,
) -> Result<Json<CaseDetailOutcome>, AppError> {
    let outcome = open_case_detail(&state.store, session.as_ref(), &id).await?;
    if outcome == CaseDetailOutcome::Unauthorized {
        cookies.schedule(PendingCookieAction::Clear);
    }
    Ok(Json(outcome))
}

// ---------------------------------------------------------------------------
// GET /api/cases/{id}/documents
// ---------------------------------------------------------------------------

/// Documents attached to a case, newest first.
#[utoipa::path(
    get,
    path = "/api/cases/{id}/documents",
    params(("id" = String, Path, description = "Case UUID")),
    responses(
        (status = 200, description = "Case documents", body = Vec<CaseDocumentResponse>),
        (status = 400, description = "Invalid case id", body = AppError),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 403, description = "Staff access required", body = AppError)
    ),
    tag = "cases"
)]
pub async fn list_case_documents<S: CaseRecords>(
    State(state): State<AppState<S>>,
    MaybeSession(session): MaybeSession,
    Path(id): Path<String>,
) -> Result<Json<Vec<CaseDocumentResponse>>, AppError> {
    let documents = list_documents_as(&state.store, session.as_ref(), &id).await?;
    Ok(Json(
        documents.into_iter().map(CaseDocumentResponse::from).collect(),
    ))
}

// ---------------------------------------------------------------------------
// DELETE /api/cases/{id}
// ---------------------------------------------------------------------------

/// Delete a case. Admins, and staff attorneys and secretaries only.
#[utoipa::path(
    delete,
    path = "/api/cases/{id}",
    params(("id" = String, Path, description = "Case UUID")),
    responses(
        (status = 204, description = "Case deleted"),
        (status = 400, description = "Invalid case id", body = AppError),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 403, description = "Delete not permitted", body = AppError),
        (status = 404, description = "Case not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn delete_case<S: CaseRecords>(
    State(state): State<AppState<S>>,
    MaybeSession(session): MaybeSession,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_case_as(&state.store, session.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
