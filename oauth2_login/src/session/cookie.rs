//! Signed cookie encoding for [`SessionData`]
//!
//! The cookie value is `payload.signature`, where `payload` is the base64url
//! encoded JSON of the session and `signature` is the base64url encoded
//! HMAC-SHA256 of `payload` under the configured secret. Nothing is kept on
//! the server side.

use headers::HeaderMapExt;
use hmac::{Hmac, Mac};
use http::HeaderMap;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::SessionConfig;
use crate::session::errors::SessionError;
use crate::session::types::SessionData;
use crate::utils::{base64url_decode, base64url_encode, header_set_cookie};

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct SessionCodec {
    secret_key: Vec<u8>,
    cookie_name: String,
    max_age: i64,
    secure: bool,
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("cookie_name", &self.cookie_name)
            .field("max_age", &self.max_age)
            .field("secure", &self.secure)
            .finish_non_exhaustive()
    }
}

impl SessionCodec {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            secret_key: config.secret_key.clone(),
            cookie_name: config.cookie_name.clone(),
            max_age: config.max_age,
            secure: config.secure,
        }
    }

    fn sign(&self, payload: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret_key).expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    /// Serialize and sign the session into a cookie value.
    pub fn encode(&self, session: &SessionData) -> Result<String, SessionError> {
        let json = serde_json::to_vec(session).map_err(|e| SessionError::Serde(e.to_string()))?;
        let payload = base64url_encode(json);
        let signature = base64url_encode(self.sign(&payload));
        Ok(format!("{payload}.{signature}"))
    }

    /// Verify and deserialize a cookie value produced by [`SessionCodec::encode`].
    pub fn decode(&self, value: &str) -> Result<SessionData, SessionError> {
        let (payload, signature) = value
            .split_once('.')
            .ok_or_else(|| SessionError::Malformed("missing signature".to_string()))?;

        let signature = base64url_decode(signature)?;
        let expected = self.sign(payload);
        if !bool::from(signature.ct_eq(&expected)) {
            return Err(SessionError::InvalidSignature);
        }

        let json = base64url_decode(payload)?;
        serde_json::from_slice(&json).map_err(|e| SessionError::Serde(e.to_string()))
    }

    /// Read the session carried by the request's cookies.
    ///
    /// A missing, malformed or forged cookie is treated as an empty session.
    pub fn load(&self, headers: &HeaderMap) -> SessionData {
        let Some(cookies) = headers.typed_get::<headers::Cookie>() else {
            tracing::debug!("No cookie header found");
            return SessionData::default();
        };

        let Some(value) = cookies.get(&self.cookie_name) else {
            tracing::debug!("No session cookie '{}' found in cookies", self.cookie_name);
            return SessionData::default();
        };

        match self.decode(value) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Discarding session cookie: {}", e);
                SessionData::default()
            }
        }
    }

    /// Append a `Set-Cookie` header carrying the signed session.
    pub fn store_header(
        &self,
        session: &SessionData,
        headers: &mut HeaderMap,
    ) -> Result<(), SessionError> {
        let value = self.encode(session)?;
        header_set_cookie(
            headers,
            &self.cookie_name,
            &value,
            self.max_age,
            self.secure,
        )?;
        Ok(())
    }
}
