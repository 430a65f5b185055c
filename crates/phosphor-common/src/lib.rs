pub mod errors;
pub mod types;

pub use errors::{ConfigError, PhosphorError};
pub use types::{Color, Rect};

pub type Result<T> = std::result::Result<T, PhosphorError>;
