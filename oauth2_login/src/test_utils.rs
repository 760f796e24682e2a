//! In-process mock identity provider for unit tests
//!
//! Each [`MockProvider`] binds its own axum server to an ephemeral port on
//! 127.0.0.1, so tests can run in parallel without sharing state. Responses
//! are configurable per test and every request is recorded.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};

use crate::config::{OAuth2Config, SessionConfig};

#[derive(Clone, Debug)]
pub(crate) struct RecordedRequest {
    pub(crate) headers: HeaderMap,
    pub(crate) body: String,
}

#[derive(Clone)]
pub(crate) struct MockState {
    token_response: Arc<Mutex<(StatusCode, String)>>,
    profile_response: Arc<Mutex<(StatusCode, String)>>,
    delay: Arc<Mutex<Option<Duration>>>,
    token_requests: Arc<Mutex<Vec<RecordedRequest>>>,
    profile_requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            token_response: Arc::new(Mutex::new((
                StatusCode::OK,
                r#"{"access_token":"abc123","token_type":"bearer","expires_in":43199}"#
                    .to_string(),
            ))),
            profile_response: Arc::new(Mutex::new((
                StatusCode::OK,
                r#"{"id":123,"nickname":"tester"}"#.to_string(),
            ))),
            delay: Arc::new(Mutex::new(None)),
            token_requests: Arc::default(),
            profile_requests: Arc::default(),
        }
    }
}

pub(crate) struct MockProvider {
    pub(crate) base_url: String,
    state: MockState,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockProvider {
    pub(crate) async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
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

    pub(crate) fn set_token_response(&self, status: StatusCode, body: &str) {
        *self.state.token_response.lock().unwrap() = (status, body.to_string());
    }

    pub(crate) fn set_profile_response(&self, status: StatusCode, body: &str) {
        *self.state.profile_response.lock().unwrap() = (status, body.to_string());
    }

    pub(crate) fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = Some(delay);
    }

    pub(crate) fn token_requests(&self) -> Vec<RecordedRequest> {
        self.state.token_requests.lock().unwrap().clone()
    }

    pub(crate) fn profile_requests(&self) -> Vec<RecordedRequest> {
        self.state.profile_requests.lock().unwrap().clone()
    }

    pub(crate) fn oauth2_config(&self) -> OAuth2Config {
        OAuth2Config {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            authorization_url: format!("{}/oauth/authorize", self.base_url)
                .parse()
                .unwrap(),
            token_url: format!("{}/oauth/token", self.base_url).parse().unwrap(),
            redirect_uri: "http://localhost:8000/callback".parse().unwrap(),
            userinfo_url: format!("{}/v2/user/me", self.base_url).parse().unwrap(),
            logout_url: format!("{}/oauth/logout", self.base_url).parse().unwrap(),
            logout_redirect_uri: "http://localhost:8000/".parse().unwrap(),
            http_timeout: Duration::from_secs(5),
        }
    }
}

pub(crate) fn test_session_config() -> SessionConfig {
    SessionConfig {
        secret_key: b"test-session-secret".to_vec(),
        cookie_name: "session".to_string(),
        max_age: 600,
        secure: false,
    }
}

async fn respond(
    state: &MockState,
    response: &Arc<Mutex<(StatusCode, String)>>,
    log: &Arc<Mutex<Vec<RecordedRequest>>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    log.lock().unwrap().push(RecordedRequest { headers, body });
    let delay = *state.delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    response.lock().unwrap().clone()
}

async fn token(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    respond(
        &state,
        &state.token_response,
        &state.token_requests,
        headers,
        body,
    )
    .await
}

async fn profile(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    respond(
        &state,
        &state.profile_response,
        &state.profile_requests,
        headers,
        body,
    )
    .await
}
