//! Storage seams for sessions and case records.
//!
//! Handlers and the case-detail loader are written against these traits;
//! [`PgStore`] is the PostgreSQL implementation.

use std::future::Future;

use chrono::{DateTime, Utc};
use shared_types::{AppError, CaseDocument, CaseRecord, LoginRecord, StaffUser};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;
use crate::repo;

/// A persisted refresh token, looked up by hash.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredRefreshToken {
    pub id: i64,
    pub revoked: bool,
}

// ── Traits ───────────────────────────────────────────────────────────

/// Credential and refresh-token persistence.
pub trait SessionStore: Clone + Send + Sync + 'static {
    fn find_login(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<LoginRecord>, AppError>> + Send;

    fn insert_refresh_token(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    fn find_refresh_token(
        &self,
        user_id: i64,
        token_hash: &str,
    ) -> impl Future<Output = Result<Option<StoredRefreshToken>, AppError>> + Send;

    fn revoke_refresh_token(&self, id: i64) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Terminate every session of a user.
    fn revoke_user_sessions(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<u64, AppError>> + Send;
}

/// Read access to users and cases, plus the delete behind the delete button.
///
/// Reads return `None` for a missing row; callers decide what "missing" means.
pub trait CaseRecords: Clone + Send + Sync + 'static {
    fn find_staff_user(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Option<StaffUser>, AppError>> + Send;

    fn find_case(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<CaseRecord>, AppError>> + Send;

    fn delete_case(&self, id: Uuid) -> impl Future<Output = Result<bool, AppError>> + Send;

    fn list_case_documents(
        &self,
        case_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CaseDocument>, AppError>> + Send;

    /// Cheap connectivity probe for the health check.
    fn ping(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Everything the HTTP layer needs.
pub trait Store: SessionStore + CaseRecords {}

impl<T: SessionStore + CaseRecords> Store for T {}

// ── PostgreSQL implementation ───────────────────────────────────────

#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

impl SessionStore for PgStore {
    async fn find_login(&self, email: &str) -> Result<Option<LoginRecord>, AppError> {
        repo::user::find_login(&self.pool, email).await
    }

    async fn insert_refresh_token(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        repo::refresh_token::insert(&self.pool, user_id, token_hash, expires_at).await
    }

    async fn find_refresh_token(
        &self,
        user_id: i64,
        token_hash: &str,
    ) -> Result<Option<StoredRefreshToken>, AppError> {
        repo::refresh_token::find(&self.pool, user_id, token_hash).await
    }

    async fn revoke_refresh_token(&self, id: i64) -> Result<(), AppError> {
        repo::refresh_token::revoke(&self.pool, id).await
    }

    async fn revoke_user_sessions(&self, user_id: i64) -> Result<u64, AppError> {
        repo::refresh_token::revoke_all_for_user(&self.pool, user_id).await
    }
}

impl CaseRecords for PgStore {
    async fn find_staff_user(&self, user_id: i64) -> Result<Option<StaffUser>, AppError> {
        repo::user::find_staff_user(&self.pool, user_id).await
    }

    async fn find_case(&self, id: Uuid) -> Result<Option<CaseRecord>, AppError> {
        repo::case::find_by_id(&self.pool, id).await
    }

    async fn delete_case(&self, id: Uuid) -> Result<bool, AppError> {
        repo::case::delete(&self.pool, id).await
    }

    async fn list_case_documents(&self, case_id: Uuid) -> Result<Vec<CaseDocument>, AppError> {
        repo::document::list_by_case(&self.pool, case_id).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(SqlxErrorExt::into_app_error)
    }
}
