//! Error types for request coordination

use thiserror::Error;

use crate::oauth2::OAuth2Error;
use crate::session::SessionError;

/// Errors that can end a login-related request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinationError {
    /// No access token in the session
    #[error("Unauthorized access")]
    Unauthorized,

    /// Error from OAuth2 operations
    #[error("OAuth2 error: {0}")]
    OAuth2Error(OAuth2Error),

    /// Error from Session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),
}

impl From<OAuth2Error> for CoordinationError {
    fn from(err: OAuth2Error) -> Self {
        match err {
            OAuth2Error::Unauthenticated => {
                tracing::debug!("No access token available");
                CoordinationError::Unauthorized
            }
            err => {
                tracing::error!("OAuth2 error: {}", err);
                CoordinationError::OAuth2Error(err)
            }
        }
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        tracing::error!("Session error: {}", err);
        CoordinationError::SessionError(err)
    }
}
