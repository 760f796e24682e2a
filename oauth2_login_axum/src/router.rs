//! Router for the landing, login and welcome pages

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Create the application router with HTTP request tracing
///
/// The endpoints are:
/// - `GET /` landing page
/// - `GET /login` redirect to the provider's consent page
/// - `GET /callback` token exchange, then redirect to `/welcome`
/// - `GET /welcome` profile page for the signed-in user
/// - `GET /logout` redirect to the provider's logout endpoint
pub fn app_router(state: AppState) -> Router {
    app_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create the application router without HTTP tracing
///
/// This is the same as `app_router()` but without the tracing middleware.
/// Use this if you want to add your own tracing middleware.
pub fn app_router_no_trace(state: AppState) -> Router {
    Router::new()
        .route("/", get(super::pages::index))
        .route("/login", get(super::oauth2::login))
        .route("/callback", get(super::oauth2::callback))
        .route("/welcome", get(super::pages::welcome))
        .route("/logout", get(super::oauth2::logout))
        .with_state(state)
}
