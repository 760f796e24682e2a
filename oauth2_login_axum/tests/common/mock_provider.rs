//! Axum-based mock identity provider
//!
//! Serves the authorize, token and user-info endpoints on 127.0.0.1 with an
//! ephemeral port. Responses are set per test and every token and profile
//! request is counted.

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

pub const MOCK_AUTHORIZATION_CODE: &str = "mock-authorization-code";
pub const MOCK_ACCESS_TOKEN: &str = "abc123";

#[derive(Clone)]
pub struct MockProviderState {
    token_response: Arc<Mutex<(StatusCode, String)>>,
    profile_response: Arc<Mutex<(StatusCode, String)>>,
    token_bodies: Arc<Mutex<Vec<String>>>,
    profile_authorizations: Arc<Mutex<Vec<String>>>,
}

impl Default for MockProviderState {
    fn default() -> Self {
        Self {
            token_response: Arc::new(Mutex::new((
                StatusCode::OK,
                format!(r#"{{"access_token":"{MOCK_ACCESS_TOKEN}","token_type":"bearer"}}"#),
            ))),
            profile_response: Arc::new(Mutex::new((
                StatusCode::OK,
                r#"{"id":123,"nickname":"tester"}"#.to_string(),
            ))),
            token_bodies: Arc::default(),
            profile_authorizations: Arc::default(),
        }
    }
}

pub struct MockProvider {
    pub base_url: String,
    state: MockProviderState,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockProvider {
    pub async fn start() -> Self {
        let state = MockProviderState::default();
        let app = Router::new()
            .route("/oauth/authorize", get(authorize))
            .route("/oauth/token", post(token))
            .route("/v2/user/me", post(profile))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock provider");
        let addr = listener.local_addr().expect("Mock provider has no address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock provider failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            _handle: handle,
        }
    }

    pub fn set_token_response(&self, status: StatusCode, body: &str) {
        *self.state.token_response.lock().unwrap() = (status, body.to_string());
    }

    pub fn set_profile_response(&self, status: StatusCode, body: &str) {
        *self.state.profile_response.lock().unwrap() = (status, body.to_string());
    }

    pub fn token_requests(&self) -> Vec<String> {
        self.state.token_bodies.lock().unwrap().clone()
    }

    pub fn profile_requests(&self) -> Vec<String> {
        self.state.profile_authorizations.lock().unwrap().clone()
    }
}

/// Consent is granted immediately: redirect back with a fixed code.
async fn authorize(Query(params): Query<HashMap<String, String>>) -> Response {
    let Some(redirect_uri) = params.get("redirect_uri") else {
        return (StatusCode::BAD_REQUEST, "redirect_uri missing").into_response();
    };
    let location = format!("{redirect_uri}?code={MOCK_AUTHORIZATION_CODE}");
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

async fn token(State(state): State<MockProviderState>, body: String) -> (StatusCode, String) {
    state.token_bodies.lock().unwrap().push(body);
    state.token_response.lock().unwrap().clone()
}

async fn profile(State(state): State<MockProviderState>, headers: HeaderMap) -> (StatusCode, String) {
    let authorization = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.profile_authorizations.lock().unwrap().push(authorization);
    state.profile_response.lock().unwrap().clone()
}
