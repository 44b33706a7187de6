use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::Session;

use super::jwt::Claims;

/// The request's session, if any. Never rejects; the case-detail flow
/// turns a missing session into a redirect rather than a 401.
pub struct MaybeSession(pub Option<Session>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(
            parts.extensions.get::<Claims>().map(Claims::session),
        ))
    }
}
