use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Top-level account role stored in `users.role`.
///
/// Only `Staff` and `Admin` may open the staff dashboard; any other value
/// (e.g. `client`) is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    Staff,
    Admin,
    Other(String),
}

impl UserRole {
    pub fn parse(s: &str) -> Self {
        match s {
            "staff" => UserRole::Staff,
            "admin" => UserRole::Admin,
            other => UserRole::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Staff => "staff",
            UserRole::Admin => "admin",
            UserRole::Other(s) => s,
        }
    }

    /// True for the roles allowed into staff views.
    pub fn is_staff_or_admin(&self) -> bool {
        matches!(self, UserRole::Staff | UserRole::Admin)
    }
}

/// Sub-classification of a staff user (`users.staff_role`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffRole {
    SeniorAttorney,
    Attorney,
    Secretary,
    Other(String),
}

impl StaffRole {
    pub fn parse(s: &str) -> Self {
        match s {
            "senior_attorney" => StaffRole::SeniorAttorney,
            "attorney" => StaffRole::Attorney,
            "secretary" => StaffRole::Secretary,
            other => StaffRole::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StaffRole::SeniorAttorney => "senior_attorney",
            StaffRole::Attorney => "attorney",
            StaffRole::Secretary => "secretary",
            StaffRole::Other(s) => s,
        }
    }
}

/// An authenticated session. Only the user id is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
}

/// Authorization-relevant columns of a `users` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct StaffUser {
    pub id: i64,
    pub role: String,
    pub staff_role: Option<String>,
}

impl StaffUser {
    pub fn user_role(&self) -> UserRole {
        UserRole::parse(&self.role)
    }

    pub fn staff_role(&self) -> Option<StaffRole> {
        self.staff_role.as_deref().map(StaffRole::parse)
    }
}

/// Credentials row used by the login flow.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct LoginRecord {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub password_hash: Option<String>,
    pub role: String,
    pub staff_role: Option<String>,
}

/// Request DTO for email/password login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Signed-in user info safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_role: Option<String>,
}

impl From<LoginRecord> for AuthUser {
    fn from(r: LoginRecord) -> Self {
        Self {
            id: r.id,
            email: r.email,
            display_name: r.display_name,
            role: r.role,
            staff_role: r.staff_role,
        }
    }
}

/// Response returned by the REST login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub user: AuthUser,
    pub access_token: String,
}
