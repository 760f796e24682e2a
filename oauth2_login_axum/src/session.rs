use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::request::Parts;
use oauth2_login::SessionData;

use crate::state::AppState;

/// Session data decoded from the signed session cookie, available as an Axum extractor
///
/// Extraction never fails: a missing or invalid cookie yields an empty
/// session. Whether the session is authenticated is decided by the handler.
///
/// # Example
///
/// ```no_run
/// use oauth2_login_axum::AuthSession;
///
/// async fn handler(AuthSession(session): AuthSession) -> String {
///     format!("signed in: {}", session.is_authenticated())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthSession(pub SessionData);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AuthSession(state.sessions.load(&parts.headers)))
    }
}
