use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuth2Error {
    /// The provider did not hand out a usable access token for the code.
    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    /// No access token is available for the current session.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The provider accepted the token but returned no profile data.
    #[error("Profile unavailable: {0}")]
    ProfileUnavailable(String),

    /// The provider redirected back with an error instead of a code.
    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),
}
