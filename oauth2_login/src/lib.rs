//! oauth2_login - OAuth2 authorization-code login for small web backends
//!
//! This crate drives the three-legged OAuth2 authorization-code grant against a
//! single identity provider and keeps the resulting access token in a signed,
//! client-side cookie session. It is framework independent apart from the
//! `http` types; see `oauth2-login-axum` for the web layer.

mod config;
mod coordination;
mod oauth2;
mod session;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{AppConfig, ConfigError, OAuth2Config, SessionConfig};

pub use coordination::{CallbackParams, CoordinationError, callback_core, logout_core, welcome_core};

pub use oauth2::{OAuth2Error, OAuth2Flow, TokenResponse, UserProfile};

pub use session::{SessionCodec, SessionData, SessionError};

pub use utils::UtilError;
