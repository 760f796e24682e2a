use std::sync::Arc;

use oauth2_login::{AppConfig, OAuth2Flow, SessionCodec};

/// Shared, read-only state handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub flow: Arc<OAuth2Flow>,
    pub sessions: Arc<SessionCodec>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: Arc::new(SessionCodec::new(&config.session)),
            flow: Arc::new(OAuth2Flow::new(config.oauth2)),
        }
    }
}
