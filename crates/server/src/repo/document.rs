use shared_types::{AppError, CaseDocument};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// List a case's documents, newest first.
pub async fn list_by_case(
    pool: &Pool<Postgres>,
    case_id: Uuid,
) -> Result<Vec<CaseDocument>, AppError> {
    sqlx::query_as::<_, CaseDocument>(
        r#"
        SELECT id, case_id, file_name, content_type, uploaded_at
        FROM case_documents
        WHERE case_id = $1
        ORDER BY uploaded_at DESC
        "#,
    )
    .bind(case_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
