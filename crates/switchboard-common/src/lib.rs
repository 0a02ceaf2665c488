pub mod errors;
pub mod types;

pub use errors::{ConfigError, SessionError};
pub use types::Rect;
