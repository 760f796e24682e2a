mod errors;
mod main;
mod types;

pub use errors::OAuth2Error;
pub use main::OAuth2Flow;
pub use types::{TokenResponse, UserProfile};
