//! Outcome of loading the staff case-detail view, and everything the page
//! derives from it. Rendering is a pure function of [`CaseDetailOutcome`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CaseResponse, CaseStatus, StaffRole, StaffUser, StatusBadge, UserRole};

/// Who is looking at the case. Mirrors the viewer's `users` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Viewer {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_role: Option<String>,
}

impl From<StaffUser> for Viewer {
    fn from(u: StaffUser) -> Self {
        Self {
            role: u.role,
            staff_role: u.staff_role,
        }
    }
}

impl Viewer {
    pub fn user_role(&self) -> UserRole {
        UserRole::parse(&self.role)
    }

    pub fn staff_role(&self) -> Option<StaffRole> {
        self.staff_role.as_deref().map(StaffRole::parse)
    }

    pub fn can_delete_case(&self) -> bool {
        can_delete_case(&self.user_role(), self.staff_role().as_ref())
    }
}

/// A fetched case together with the viewer it was fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseDetail {
    #[serde(rename = "case")]
    pub case_item: CaseResponse,
    pub viewer: Viewer,
}

/// Terminal states of one case-detail load.
///
/// Store failures are not an outcome: they surface as `AppError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum CaseDetailOutcome {
    /// No session. Redirect home; the case was never fetched.
    Unauthenticated,
    /// No user row or a role outside staff/admin. The session has been
    /// signed out.
    Unauthorized,
    NotFound,
    Loaded(CaseDetail),
}

/// Admins may always delete. Staff may delete when their sub-role is
/// senior attorney, attorney or secretary.
pub fn can_delete_case(role: &UserRole, staff_role: Option<&StaffRole>) -> bool {
    match role {
        UserRole::Admin => true,
        UserRole::Staff => matches!(
            staff_role,
            Some(StaffRole::SeniorAttorney | StaffRole::Attorney | StaffRole::Secretary)
        ),
        UserRole::Other(_) => false,
    }
}

/// Render an RFC 3339 timestamp as its UTC calendar date (`YYYY-MM-DD`).
/// Unparseable input is shown as-is.
pub fn format_created_on(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Everything the loaded page displays, precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDetailView {
    pub case_id: String,
    pub case_number: String,
    pub case_type: String,
    pub client_name: String,
    pub status: StatusBadge,
    pub created_on: String,
    pub can_delete: bool,
    pub is_staff: bool,
}

impl CaseDetail {
    pub fn view(&self) -> CaseDetailView {
        let c = &self.case_item;
        CaseDetailView {
            case_id: c.id.clone(),
            case_number: c.case_number.clone(),
            case_type: c.case_type.clone(),
            client_name: c.client_name.clone(),
            status: CaseStatus::parse(&c.status).badge(),
            created_on: format_created_on(&c.created_at),
            can_delete: self.viewer.can_delete_case(),
            // Only staff and admin sessions ever reach a loaded view.
            is_staff: true,
        }
    }
}
