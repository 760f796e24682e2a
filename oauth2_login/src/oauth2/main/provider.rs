use http::header::CONTENT_TYPE;
use serde_json::Value;
use url::form_urlencoded;

use crate::config::OAuth2Config;
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::{TokenResponse, UserProfile};

use super::utils::get_client;

pub(super) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

pub(super) async fn request_token(
    config: &OAuth2Config,
    code: &str,
) -> Result<TokenResponse, OAuth2Error> {
    let body = form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "authorization_code")
        .append_pair("client_id", &config.client_id)
        .append_pair("client_secret", &config.client_secret)
        .append_pair("redirect_uri", config.redirect_uri.as_str())
        .append_pair("code", code)
        .finish();

    let client =
        get_client(config.http_timeout).map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;
    let response = client
        .post(config.token_url.as_str())
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(body)
        .send()
        .await
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

    let status = response.status();
    tracing::debug!("Token Exchange Response Status: {}", status);

    let response_body = response
        .text()
        .await
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

    serde_json::from_str(&response_body).map_err(|e| {
        tracing::debug!("Token Exchange Response Body: {:#?}", response_body);
        OAuth2Error::TokenExchange(format!("Unexpected token response ({status}): {e}"))
    })
}

pub(super) async fn request_profile(
    config: &OAuth2Config,
    access_token: &str,
) -> Result<UserProfile, OAuth2Error> {
    let client = get_client(config.http_timeout)
        .map_err(|e| OAuth2Error::ProfileUnavailable(e.to_string()))?;
    let response = client
        .post(config.userinfo_url.as_str())
        .bearer_auth(access_token)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .send()
        .await
        .map_err(|e| OAuth2Error::ProfileUnavailable(e.to_string()))?;

    let status = response.status();
    let response_body = response
        .text()
        .await
        .map_err(|e| OAuth2Error::ProfileUnavailable(e.to_string()))?;

    tracing::debug!("User Info Response ({}): {:#?}", status, response_body);

    if !status.is_success() {
        return Err(OAuth2Error::ProfileUnavailable(format!(
            "Provider responded with {status}"
        )));
    }

    if response_body.trim().is_empty() {
        return Err(OAuth2Error::ProfileUnavailable(
            "Empty response body".to_string(),
        ));
    }

    let value: Value = serde_json::from_str(&response_body).map_err(|e| {
        OAuth2Error::ProfileUnavailable(format!("Failed to deserialize response body: {e}"))
    })?;

    UserProfile::from_value(value)
        .ok_or_else(|| OAuth2Error::ProfileUnavailable("No user data in response".to_string()))
}
