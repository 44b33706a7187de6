//! Loading the staff case-detail view and the staff-only actions next to it.
//!
//! [`load_case_detail`] has no side effects; [`open_case_detail`] adds the
//! forced sign-out for sessions that turn out not to belong to staff.

use shared_types::{
    AppError, CaseDetail, CaseDetailOutcome, CaseDocument, CaseResponse, Session, StaffUser,
    Viewer,
};
use uuid::Uuid;

use crate::auth::session::sign_out;
use crate::store::{CaseRecords, Store};

/// The viewer's user row, if it carries a staff or admin role.
pub async fn authorize_staff<R: CaseRecords>(
    records: &R,
    user_id: i64,
) -> Result<Option<StaffUser>, AppError> {
    let user = records.find_staff_user(user_id).await?;
    Ok(user.filter(|u| u.user_role().is_staff_or_admin()))
}

/// Session check, role lookup, then case fetch. Each read is awaited
/// before the next; the case is never read for a session that failed the
/// earlier steps.
#[tracing::instrument(skip(records, session), fields(user_id = session.map(|s| s.user_id)))]
pub async fn load_case_detail<R: CaseRecords>(
    records: &R,
    session: Option<&Session>,
    case_id: &str,
) -> Result<CaseDetailOutcome, AppError> {
    let Some(session) = session else {
        return Ok(CaseDetailOutcome::Unauthenticated);
    };

    let Some(user) = authorize_staff(records, session.user_id).await? else {
        tracing::warn!(user_id = session.user_id, "Case detail denied: not staff");
        return Ok(CaseDetailOutcome::Unauthorized);
    };

    // A malformed id cannot name a row.
    let Ok(id) = Uuid::parse_str(case_id) else {
        return Ok(CaseDetailOutcome::NotFound);
    };

    match records.find_case(id).await? {
        Some(record) => Ok(CaseDetailOutcome::Loaded(CaseDetail {
            case_item: CaseResponse::from(record),
            viewer: Viewer::from(user),
        })),
        None => Ok(CaseDetailOutcome::NotFound),
    }
}

/// [`load_case_detail`], signing the user out when the outcome is
/// `Unauthorized`. Clearing the cookies is left to the HTTP layer.
pub async fn open_case_detail<S: Store>(
    store: &S,
    session: Option<&Session>,
    case_id: &str,
) -> Result<CaseDetailOutcome, AppError> {
    let outcome = load_case_detail(store, session, case_id).await?;

    if let (CaseDetailOutcome::Unauthorized, Some(session)) = (&outcome, session) {
        if let Err(e) = sign_out(store, session.user_id).await {
            tracing::error!(user_id = session.user_id, error = %e, "Forced sign-out failed");
        }
    }

    Ok(outcome)
}

async fn require_staff<R: CaseRecords>(
    records: &R,
    session: Option<&Session>,
) -> Result<StaffUser, AppError> {
    let session = session.ok_or_else(|| AppError::unauthorized("Authentication required"))?;
    authorize_staff(records, session.user_id)
        .await?
        .ok_or_else(|| AppError::forbidden("Staff access required"))
}

fn parse_case_id(case_id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(case_id).map_err(|_| AppError::bad_request("Invalid case id"))
}

/// Documents attached to a case, newest first. Staff only.
#[tracing::instrument(skip(records, session))]
pub async fn list_documents_as<R: CaseRecords>(
    records: &R,
    session: Option<&Session>,
    case_id: &str,
) -> Result<Vec<CaseDocument>, AppError> {
    require_staff(records, session).await?;
    let id = parse_case_id(case_id)?;
    records.list_case_documents(id).await
}

/// Delete a case on behalf of the session holder. The delete permission is
/// re-derived from the user row, never taken from the client.
#[tracing::instrument(skip(records, session))]
pub async fn delete_case_as<R: CaseRecords>(
    records: &R,
    session: Option<&Session>,
    case_id: &str,
) -> Result<(), AppError> {
    let user = require_staff(records, session).await?;
    if !Viewer::from(user.clone()).can_delete_case() {
        tracing::warn!(user_id = user.id, case_id, "Case delete denied");
        return Err(AppError::forbidden("You are not allowed to delete cases"));
    }

    let id = parse_case_id(case_id)?;
    if records.delete_case(id).await? {
        tracing::info!(user_id = user.id, case_id, "Case deleted");
        Ok(())
    } else {
        Err(AppError::not_found("Case not found"))
    }
}
