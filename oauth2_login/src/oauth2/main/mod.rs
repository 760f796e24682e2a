mod core;
mod provider;
mod utils;

pub use core::OAuth2Flow;
