mod cookie;
mod errors;
mod types;

pub use cookie::SessionCodec;
pub use errors::SessionError;
pub use types::SessionData;
