//! Axum integration for `oauth2-login`
//!
//! Mount [`app_router`] to serve the landing page, the login redirect, the
//! OAuth2 callback, the welcome page and the logout redirect.

mod error;
mod oauth2;
mod pages;
mod router;
mod session;
mod state;

pub use error::IntoResponseError;
pub use router::{app_router, app_router_no_trace};
pub use session::AuthSession;
pub use state::AppState;

pub use oauth2_login::{AppConfig, ConfigError};
