use http::HeaderMap;
use serde::Deserialize;
use url::Url;

use crate::oauth2::{OAuth2Error, OAuth2Flow, UserProfile};
use crate::session::{SessionCodec, SessionData};

use super::errors::CoordinationError;

/// Query parameters the provider appends when redirecting back
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    /// Echoed back by the provider; not validated.
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Handle the provider's redirect back to the application.
///
/// Exchanges the authorization code for an access token and returns the
/// `Set-Cookie` headers that store it in the session. On any failure no
/// session header is produced, leaving the browser's session as it was.
pub async fn callback_core(
    flow: &OAuth2Flow,
    codec: &SessionCodec,
    params: &CallbackParams,
    mut session: SessionData,
) -> Result<HeaderMap, CoordinationError> {
    if let Some(error) = &params.error {
        let reason = match &params.error_description {
            Some(description) => format!("{error}: {description}"),
            None => error.clone(),
        };
        tracing::debug!("Provider returned an error instead of a code: {}", reason);
        return Err(OAuth2Error::AuthorizationDenied(reason).into());
    }

    let code = params
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| OAuth2Error::TokenExchange("Authorization code missing".to_string()))?;

    let access_token = flow.exchange_code_for_token(code).await?;
    session.set_token(access_token);

    let mut headers = HeaderMap::new();
    codec.store_header(&session, &mut headers)?;

    tracing::debug!("Stored access token in session");
    Ok(headers)
}

/// Fetch the signed-in user's profile for the welcome page.
///
/// Fails with [`CoordinationError::Unauthorized`] before any network call
/// when the session holds no token.
pub async fn welcome_core(
    flow: &OAuth2Flow,
    session: &SessionData,
) -> Result<UserProfile, CoordinationError> {
    let Some(token) = session.token().filter(|t| !t.is_empty()) else {
        tracing::debug!("No token in session");
        return Err(CoordinationError::Unauthorized);
    };

    Ok(flow.fetch_profile(token).await?)
}

/// Provider logout URL.
///
/// The local session is left untouched; only the provider-side session is
/// ended, and the cookie expires on its own.
pub fn logout_core(flow: &OAuth2Flow, session: &SessionData) -> Url {
    if session.is_authenticated() {
        tracing::debug!("Logging out at the provider; local session token is kept");
    }
    flow.logout_url()
}
