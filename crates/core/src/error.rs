use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Login with an email no account is registered under.
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by anything printable
    /// (surrogate id, email, title).
    pub fn not_found(entity: &'static str, key: impl Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
