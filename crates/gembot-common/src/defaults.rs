//! Remote API defaults shared by the config schema and the client.

/// Environment variable the credential is read from by default.
pub const DEFAULT_KEY_ENV: &str = "GEMINI_API_KEY";

/// Base URL of the Generative Language API model collection.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used when neither the config file nor the CLI names one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
