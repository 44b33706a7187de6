use shared_types::{AppError, LoginRecord, StaffUser};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Read the role columns of a user. `None` when no row matches.
pub async fn find_staff_user(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<Option<StaffUser>, AppError> {
    sqlx::query_as::<_, StaffUser>("SELECT id, role, staff_role FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Look up login credentials by email (case-insensitive).
pub async fn find_login(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<LoginRecord>, AppError> {
    sqlx::query_as::<_, LoginRecord>(
        r#"
        SELECT id, email, display_name, password_hash, role, staff_role
        FROM users
        WHERE lower(email) = lower($1)
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
