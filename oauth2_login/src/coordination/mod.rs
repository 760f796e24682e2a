//! Request-level coordination
//!
//! These functions sequence the OAuth2 flow controller and the cookie session
//! for one incoming request and return plain headers or data, leaving the
//! HTTP framework to turn them into responses.

mod errors;
mod oauth2;

pub use errors::CoordinationError;
pub use oauth2::{CallbackParams, callback_core, logout_core, welcome_core};
