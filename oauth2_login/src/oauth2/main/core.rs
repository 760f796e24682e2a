use url::Url;

use crate::config::OAuth2Config;
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::UserProfile;

use super::provider::{request_profile, request_token};

/// Drives the authorization-code grant against one configured provider
///
/// The flow holds no per-request state. The access token obtained from
/// [`OAuth2Flow::exchange_code_for_token`] is handed back to the caller, who
/// keeps it in the browser session and later passes it to
/// [`OAuth2Flow::fetch_profile`].
#[derive(Debug, Clone)]
pub struct OAuth2Flow {
    config: OAuth2Config,
}

impl OAuth2Flow {
    pub fn new(config: OAuth2Config) -> Self {
        Self { config }
    }

    /// URL of the provider's consent page for this client.
    pub fn authorization_url(&self) -> Url {
        let mut url = self.config.authorization_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", self.config.redirect_uri.as_str())
            .append_pair("response_type", "code");

        tracing::debug!("Auth URL: {}", url);
        url
    }

    /// URL of the provider's logout endpoint, returning to the configured page.
    pub fn logout_url(&self) -> Url {
        let mut url = self.config.logout_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair(
                "logout_redirect_uri",
                self.config.logout_redirect_uri.as_str(),
            );

        tracing::debug!("Logout URL: {}", url);
        url
    }

    /// Exchange a single-use authorization code for an access token.
    ///
    /// The request is sent exactly once. Any failure, including a timeout,
    /// is reported as [`OAuth2Error::TokenExchange`]; the code may already
    /// have been consumed by the provider, so the flow has to restart.
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<String, OAuth2Error> {
        if code.is_empty() {
            return Err(OAuth2Error::TokenExchange(
                "Authorization code missing".to_string(),
            ));
        }

        let response = request_token(&self.config, code).await.inspect_err(|e| {
            tracing::error!("Token exchange failed: {}", e);
        })?;

        match response.access_token() {
            Some(access_token) => {
                tracing::debug!(
                    "Access token issued (type: {:?}, expires_in: {:?})",
                    response.token_type,
                    response.expires_in
                );
                Ok(access_token.to_string())
            }
            None => {
                let reason = response.failure_reason();
                tracing::error!("No access token in token response: {}", reason);
                Err(OAuth2Error::TokenExchange(reason))
            }
        }
    }

    /// Fetch the user's profile with an access token from the session.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, OAuth2Error> {
        if access_token.is_empty() {
            return Err(OAuth2Error::Unauthenticated);
        }

        let profile = request_profile(&self.config, access_token)
            .await
            .inspect_err(|e| tracing::error!("Fetching user info failed: {}", e))?;

        tracing::debug!("User info: {:#?}", profile);
        Ok(profile)
    }
}
