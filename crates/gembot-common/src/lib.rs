//! Error types and remote API defaults shared by the gembot crates.

pub mod defaults;
pub mod errors;

pub use defaults::{DEFAULT_API_BASE, DEFAULT_KEY_ENV, DEFAULT_MODEL};
pub use errors::{ConfigError, GembotError};
