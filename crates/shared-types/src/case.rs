use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── DB row struct ───────────────────────────────────────────────────

/// A legal matter as stored in the `cases` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CaseRecord {
    pub id: Uuid,
    pub case_number: String,
    pub case_type: String,
    pub client_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ── API response types ──────────────────────────────────────────────

/// API response shape for a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseResponse {
    pub id: String,
    pub case_number: String,
    pub case_type: String,
    pub client_name: String,
    pub status: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl From<CaseRecord> for CaseResponse {
    fn from(c: CaseRecord) -> Self {
        Self {
            id: c.id.to_string(),
            case_number: c.case_number,
            case_type: c.case_type,
            client_name: c.client_name,
            status: c.status,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

// ── Status display ──────────────────────────────────────────────────

/// Lifecycle status of a case. Values outside the known set are kept raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    Open,
    Pending,
    Closed,
    Other(String),
}

/// Color family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Green,
    Yellow,
    Gray,
    Blue,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Green => "green",
            StatusTone::Yellow => "yellow",
            StatusTone::Gray => "gray",
            StatusTone::Blue => "blue",
        }
    }
}

/// Label and color shown for a case status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusBadge {
    pub label: String,
    pub tone: StatusTone,
}

impl CaseStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "open" => CaseStatus::Open,
            "pending" => CaseStatus::Pending,
            "closed" => CaseStatus::Closed,
            other => CaseStatus::Other(other.to_string()),
        }
    }

    /// Fixed display mapping; unknown statuses show their raw value in blue.
    pub fn badge(&self) -> StatusBadge {
        let (label, tone) = match self {
            CaseStatus::Open => ("Open", StatusTone::Green),
            CaseStatus::Pending => ("Pending", StatusTone::Yellow),
            CaseStatus::Closed => ("Closed", StatusTone::Gray),
            CaseStatus::Other(raw) => (raw.as_str(), StatusTone::Blue),
        };
        StatusBadge {
            label: label.to_string(),
            tone,
        }
    }
}
