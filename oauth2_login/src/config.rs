//! Static configuration, read once at process start
//!
//! Everything the login flow needs is collected into an immutable [`AppConfig`]
//! that the caller builds before binding the server and then hands to the flow
//! controller and the session codec. A missing required variable fails here,
//! not at the first request.

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_USERINFO_URL: &str = "https://kapi.kakao.com/v2/user/me";
const DEFAULT_LOGOUT_URL: &str = "https://kauth.kakao.com/oauth/logout";
const DEFAULT_LOGOUT_REDIRECT_URI: &str = "http://localhost:8000/";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_COOKIE_NAME: &str = "session";
// 14 days
const DEFAULT_SESSION_COOKIE_MAX_AGE: i64 = 14 * 24 * 60 * 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// Provider registration and endpoint settings for the OAuth2 flow
#[derive(Clone)]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub authorization_url: Url,
    pub token_url: Url,
    pub redirect_uri: Url,
    pub userinfo_url: Url,
    pub logout_url: Url,
    pub logout_redirect_uri: Url,
    /// Upper bound for each outbound call to the provider
    pub http_timeout: Duration,
}

impl std::fmt::Debug for OAuth2Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("authorization_url", &self.authorization_url.as_str())
            .field("token_url", &self.token_url.as_str())
            .field("redirect_uri", &self.redirect_uri.as_str())
            .field("userinfo_url", &self.userinfo_url.as_str())
            .field("logout_url", &self.logout_url.as_str())
            .field("logout_redirect_uri", &self.logout_redirect_uri.as_str())
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

/// Cookie session settings
#[derive(Clone)]
pub struct SessionConfig {
    /// HMAC key used to sign the session cookie
    pub secret_key: Vec<u8>,
    pub cookie_name: String,
    /// Cookie lifetime in seconds, always positive
    pub max_age: i64,
    pub secure: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret_key", &"<redacted>")
            .field("cookie_name", &self.cookie_name)
            .field("max_age", &self.max_age)
            .field("secure", &self.secure)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub oauth2: OAuth2Config,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Lookup(lookup);

        let oauth2 = OAuth2Config {
            client_id: vars.required("CLIENT_ID")?,
            client_secret: vars.required("CLIENT_SECRET")?,
            authorization_url: vars.required_url("AUTHORIZATION_URL")?,
            token_url: vars.required_url("TOKEN_URL")?,
            redirect_uri: vars.required_url("REDIRECT_URI")?,
            userinfo_url: vars.url_or("USERINFO_URL", DEFAULT_USERINFO_URL)?,
            logout_url: vars.url_or("LOGOUT_URL", DEFAULT_LOGOUT_URL)?,
            logout_redirect_uri: vars
                .url_or("LOGOUT_REDIRECT_URI", DEFAULT_LOGOUT_REDIRECT_URI)?,
            http_timeout: Duration::from_secs(
                vars.parsed_or("OAUTH2_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
            ),
        };

        let session = SessionConfig {
            secret_key: vars.required("SESSION_SECRET_KEY")?.into_bytes(),
            cookie_name: vars
                .optional("SESSION_COOKIE_NAME")
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE_NAME.to_string()),
            max_age: vars.positive_or("SESSION_COOKIE_MAX_AGE", DEFAULT_SESSION_COOKIE_MAX_AGE)?,
            secure: vars.parsed_or("SESSION_COOKIE_SECURE", false)?,
        };

        tracing::debug!("Loaded configuration: {:?}", oauth2);
        tracing::debug!("Loaded session configuration: {:?}", session);

        Ok(Self { oauth2, session })
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::Missing(name.to_string()))
    }

    fn required_url(&self, name: &str) -> Result<Url, ConfigError> {
        parse_url(name, &self.required(name)?)
    }

    fn url_or(&self, name: &str, default: &str) -> Result<Url, ConfigError> {
        match self.optional(name) {
            Some(value) => parse_url(name, &value),
            None => parse_url(name, default),
        }
    }

    fn parsed_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                name: name.to_string(),
                reason: e.to_string(),
            }),
            None => Ok(default),
        }
    }

    /// Like `parsed_or`, but zero or negative values are rejected.
    fn positive_or(&self, name: &str, default: i64) -> Result<i64, ConfigError> {
        let value = self.parsed_or(name, default)?;
        if value <= 0 {
            return Err(ConfigError::Invalid {
                name: name.to_string(),
                reason: format!("{value} is not a positive number of seconds"),
            });
        }
        Ok(value)
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|e| ConfigError::Invalid {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
