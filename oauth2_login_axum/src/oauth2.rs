use axum::{
    body::Body,
    extract::{Query, State},
    response::Response,
};
use http::{HeaderMap, StatusCode, header::LOCATION};

use oauth2_login::{CallbackParams, callback_core, logout_core};

use crate::error::IntoResponseError;
use crate::session::AuthSession;
use crate::state::AppState;

/// `302 Found` pointing at `location`.
fn found(location: &str) -> Result<Response, (StatusCode, String)> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, location)
        .body(Body::empty())
        .into_response_error()
}

pub(super) async fn login(State(state): State<AppState>) -> Result<Response, (StatusCode, String)> {
    found(state.flow.authorization_url().as_str())
}

pub(super) async fn callback(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Query(params): Query<CallbackParams>,
) -> Result<(HeaderMap, Response), (StatusCode, String)> {
    let headers = callback_core(&state.flow, &state.sessions, &params, session)
        .await
        .into_response_error()?;

    Ok((headers, found("/welcome")?))
}

pub(super) async fn logout(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> Result<Response, (StatusCode, String)> {
    found(logout_core(&state.flow, &session).as_str())
}
