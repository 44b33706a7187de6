use dioxus::prelude::*;
use shared_types::AuthUser;

/// Who signed in from this browser tab, if anyone.
///
/// Display only. Every server call re-checks the session, so a stale
/// value here never grants access.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Revoke the session server-side, forget the local user and go home.
pub async fn sign_out(mut auth: AuthState) {
    if let Err(e) = server::api::logout().await {
        tracing::warn!(error = %e, "Sign-out request failed");
    }
    auth.clear_auth();
    navigator().push(crate::routes::Route::Home {});
}
