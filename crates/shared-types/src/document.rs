use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file attached to a case (`case_documents` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CaseDocument {
    pub id: Uuid,
    pub case_id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// API response shape for a case document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseDocumentResponse {
    pub id: String,
    pub case_id: String,
    pub file_name: String,
    pub content_type: String,
    pub uploaded_at: String,
}

impl From<CaseDocument> for CaseDocumentResponse {
    fn from(d: CaseDocument) -> Self {
        Self {
            id: d.id.to_string(),
            case_id: d.case_id.to_string(),
            file_name: d.file_name,
            content_type: d.content_type,
            uploaded_at: d.uploaded_at.to_rfc3339(),
        }
    }
}
