use askama::Template;
use axum::{extract::State, response::Html};
use http::StatusCode;

use oauth2_login::{UserProfile, welcome_core};

use crate::error::IntoResponseError;
use crate::session::AuthSession;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.j2", escape = "html")]
struct IndexTemplate {
    authenticated: bool,
}

struct ProfileField {
    name: String,
    value: String,
}

#[derive(Template)]
#[template(path = "welcome.j2", escape = "html")]
struct WelcomeTemplate {
    nickname: Option<String>,
    id: Option<String>,
    email: Option<String>,
    profile_image: Option<String>,
    fields: Vec<ProfileField>,
}

impl From<&UserProfile> for WelcomeTemplate {
    fn from(profile: &UserProfile) -> Self {
        Self {
            nickname: profile.nickname(),
            id: profile.id(),
            email: profile.email(),
            profile_image: profile.profile_image(),
            fields: profile
                .fields()
                .into_iter()
                .map(|(name, value)| ProfileField { name, value })
                .collect(),
        }
    }
}

pub(super) async fn index(
    AuthSession(session): AuthSession,
) -> Result<Html<String>, (StatusCode, String)> {
    let template = IndexTemplate {
        authenticated: session.is_authenticated(),
    };
    Ok(Html(template.render().into_response_error()?))
}

pub(super) async fn welcome(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> Result<Html<String>, (StatusCode, String)> {
    let profile = welcome_core(&state.flow, &session)
        .await
        .into_response_error()?;

    let template = WelcomeTemplate::from(&profile);
    Ok(Html(template.render().into_response_error()?))
}
