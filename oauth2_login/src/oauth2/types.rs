use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by the provider's token endpoint
///
/// Every field is optional so that error bodies such as
/// `{"error": "invalid_grant"}` still decode; the caller decides what a
/// usable response is.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token_expires_in: Option<u64>,
    pub scope: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl TokenResponse {
    /// The access token, if present and non-empty.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Human readable reason for a missing token.
    pub(crate) fn failure_reason(&self) -> String {
        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => format!("{error}: {description}"),
            (Some(error), None) => error.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => "access_token not present in response".to_string(),
        }
    }
}

/// Profile returned by the provider's user-info endpoint
///
/// The payload is provider defined; it is kept as a JSON object and a few
/// well known fields are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    /// Wrap a decoded JSON value; only non-empty objects make a profile.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) if !map.is_empty() => Some(Self(map)),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(display_scalar)
    }

    pub fn nickname(&self) -> Option<String> {
        self.first_string(&[
            &["nickname"],
            &["properties", "nickname"],
            &["kakao_account", "profile", "nickname"],
        ])
    }

    pub fn profile_image(&self) -> Option<String> {
        self.first_string(&[
            &["properties", "profile_image"],
            &["properties", "thumbnail_image"],
            &["kakao_account", "profile", "profile_image_url"],
        ])
    }

    pub fn email(&self) -> Option<String> {
        self.first_string(&[&["kakao_account", "email"], &["email"]])
    }

    /// Top-level fields as `(name, display value)` pairs, sorted by name.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = self
            .0
            .iter()
            .map(|(key, value)| {
                let display = display_scalar(value).unwrap_or_else(|| value.to_string());
                (key.clone(), display)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }

    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(*key))
    }

    fn first_string(&self, paths: &[&[&str]]) -> Option<String> {
        paths
            .iter()
            .filter_map(|path| self.lookup(path))
            .find_map(|value| value.as_str().filter(|s| !s.is_empty()))
            .map(str::to_string)
    }
}

fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
