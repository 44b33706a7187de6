use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    middleware,
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use server::auth::{jwt, password};
use server::db::AppState;
use server::store::{CaseRecords, SessionStore, StoredRefreshToken};
use shared_types::{AppError, CaseDocument, CaseRecord, LoginRecord, StaffUser};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use tower::ServiceExt;
use uuid::Uuid;

pub const CASE_ID: &str = "0b6f8a52-3c1e-4d0a-9a55-6d7f1e2a9c01";
pub const MISSING_CASE_ID: &str = "11111111-2222-4333-8444-555555555555";
pub const PASSWORD: &str = "staffpass123";

static JWT_SECRET: Once = Once::new();

fn ensure_jwt_secret() {
    JWT_SECRET.call_once(|| std::env::set_var("JWT_SECRET", "integration-test-secret"));
}

// ── In-memory store ────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TokenRow {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub revoked: bool,
}

#[derive(Default)]
struct Tables {
    users: HashMap<i64, LoginRecord>,
    cases: HashMap<Uuid, CaseRecord>,
    documents: Vec<CaseDocument>,
    refresh_tokens: Vec<TokenRow>,
    case_reads: usize,
    fail_reads: bool,
}

/// `SessionStore` + `CaseRecords` over plain maps. Locks are never held
/// across an await.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.tables.lock().unwrap();
        f(&mut tables)
    }

    /// Add a user without a password (session-only tests).
    pub fn add_user(&self, id: i64, role: &str, staff_role: Option<&str>) {
        self.insert_user(id, role, staff_role, None);
    }

    /// Add a user who can sign in with [`PASSWORD`].
    pub fn add_login_user(&self, id: i64, role: &str, staff_role: Option<&str>) {
        let hash = password::hash_password(PASSWORD).unwrap();
        self.insert_user(id, role, staff_role, Some(hash));
    }

    fn insert_user(&self, id: i64, role: &str, staff_role: Option<&str>, hash: Option<String>) {
        let record = LoginRecord {
            id,
            email: user_email(id),
            display_name: format!("Staff Member {id}"),
            password_hash: hash,
            role: role.to_string(),
            staff_role: staff_role.map(str::to_string),
        };
        self.with(|t| t.users.insert(id, record));
    }

    pub fn add_case(&self, id: &str, case_number: &str, status: &str) {
        let id = Uuid::parse_str(id).unwrap();
        let record = CaseRecord {
            id,
            case_number: case_number.to_string(),
            case_type: "Personal Injury".to_string(),
            client_name: "Maria Lopez".to_string(),
            status: status.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 2, 9, 15, 0).unwrap(),
        };
        self.with(|t| t.cases.insert(id, record));
    }

    pub fn add_document(&self, case_id: &str, file_name: &str, uploaded_at: DateTime<Utc>) {
        let document = CaseDocument {
            id: Uuid::new_v4(),
            case_id: Uuid::parse_str(case_id).unwrap(),
            file_name: file_name.to_string(),
            content_type: "application/pdf".to_string(),
            uploaded_at,
        };
        self.with(|t| t.documents.push(document));
    }

    pub fn has_case(&self, id: &str) -> bool {
        let id = Uuid::parse_str(id).unwrap();
        self.with(|t| t.cases.contains_key(&id))
    }

    pub fn case_reads(&self) -> usize {
        self.with(|t| t.case_reads)
    }

    pub fn fail_reads(&self) {
        self.with(|t| t.fail_reads = true);
    }

    pub fn refresh_tokens(&self, user_id: i64) -> Vec<TokenRow> {
        self.with(|t| {
            t.refresh_tokens
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect()
        })
    }

    pub fn active_refresh_tokens(&self, user_id: i64) -> usize {
        self.refresh_tokens(user_id)
            .iter()
            .filter(|r| !r.revoked)
            .count()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.with(|t| t.fail_reads) {
            Err(AppError::database("connection refused"))
        } else {
            Ok(())
        }
    }
}

impl SessionStore for MemoryStore {
    async fn find_login(&self, email: &str) -> Result<Option<LoginRecord>, AppError> {
        let email = email.to_lowercase();
        Ok(self.with(|t| {
            t.users
                .values()
                .find(|u| u.email.to_lowercase() == email)
                .cloned()
        }))
    }

    async fn insert_refresh_token(
        &self,
        user_id: i64,
        token_hash: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.with(|t| {
            let id = t.refresh_tokens.len() as i64 + 1;
            t.refresh_tokens.push(TokenRow {
                id,
                user_id,
                token_hash: token_hash.to_string(),
                revoked: false,
            });
        });
        Ok(())
    }

    async fn find_refresh_token(
        &self,
        user_id: i64,
        token_hash: &str,
    ) -> Result<Option<StoredRefreshToken>, AppError> {
        Ok(self.with(|t| {
            t.refresh_tokens
                .iter()
                .find(|r| r.user_id == user_id && r.token_hash == token_hash)
                .map(|r| StoredRefreshToken {
                    id: r.id,
                    revoked: r.revoked,
                })
        }))
    }

    async fn revoke_refresh_token(&self, id: i64) -> Result<(), AppError> {
        self.with(|t| {
            if let Some(row) = t.refresh_tokens.iter_mut().find(|r| r.id == id) {
                row.revoked = true;
            }
        });
        Ok(())
    }

    async fn revoke_user_sessions(&self, user_id: i64) -> Result<u64, AppError> {
        Ok(self.with(|t| {
            let mut revoked = 0;
            for row in t
                .refresh_tokens
                .iter_mut()
                .filter(|r| r.user_id == user_id && !r.revoked)
            {
                row.revoked = true;
                revoked += 1;
            }
            revoked
        }))
    }
}

impl CaseRecords for MemoryStore {
    async fn find_staff_user(&self, user_id: i64) -> Result<Option<StaffUser>, AppError> {
        self.check_available()?;
        Ok(self.with(|t| {
            t.users.get(&user_id).map(|u| StaffUser {
                id: u.id,
                role: u.role.clone(),
                staff_role: u.staff_role.clone(),
            })
        }))
    }

    async fn find_case(&self, id: Uuid) -> Result<Option<CaseRecord>, AppError> {
        self.check_available()?;
        Ok(self.with(|t| {
            t.case_reads += 1;
            t.cases.get(&id).cloned()
        }))
    }

    async fn delete_case(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.with(|t| {
            t.documents.retain(|d| d.case_id != id);
            t.cases.remove(&id).is_some()
        }))
    }

    async fn list_case_documents(&self, case_id: Uuid) -> Result<Vec<CaseDocument>, AppError> {
        self.check_available()?;
        Ok(self.with(|t| {
            let mut docs: Vec<CaseDocument> = t
                .documents
                .iter()
                .filter(|d| d.case_id == case_id)
                .cloned()
                .collect();
            docs.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
            docs
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

// ── Router & sessions ──────────────────────────────────────────────

/// REST router over a fresh in-memory store, with the auth middleware in
/// front exactly as in production.
pub fn test_app() -> (Router, MemoryStore) {
    ensure_jwt_secret();
    let store = MemoryStore::default();

    let router = server::openapi::router_with_store(store.clone()).layer(
        middleware::from_fn_with_state(
            AppState::new(store.clone()),
            server::auth::middleware::auth_middleware::<MemoryStore>,
        ),
    );

    (router, store)
}

pub fn user_email(id: i64) -> String {
    format!("staff{id}@firm.test")
}

/// Access-token cookie for a user.
pub fn session_cookie(user_id: i64, role: &str) -> String {
    let token = jwt::create_access_token(user_id, &user_email(user_id), role).unwrap();
    format!("casedesk_access={token}")
}

/// Refresh-token cookie for a user, registered with the store.
pub async fn refresh_cookie(store: &MemoryStore, user_id: i64, role: &str) -> String {
    let (token, expires_at) = jwt::create_refresh_token(user_id, &user_email(user_id), role).unwrap();
    store
        .insert_refresh_token(user_id, &jwt::hash_token(&token), expires_at)
        .await
        .unwrap();
    format!("casedesk_refresh={token}")
}

// ── Requests ───────────────────────────────────────────────────────

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// True when both auth cookies are expired by this response.
    pub fn clears_auth_cookies(&self) -> bool {
        let cookies = self.set_cookies();
        ["casedesk_access=;", "casedesk_refresh=;"].iter().all(|prefix| {
            cookies
                .iter()
                .any(|c| c.starts_with(prefix) && c.contains("Max-Age=0"))
        })
    }
}

pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send(app, builder.body(body).unwrap()).await
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    request(app, Method::GET, uri, cookie, None).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
