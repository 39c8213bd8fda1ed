use thiserror::Error;

pub type Result<T> = std::result::Result<T, TideError>;

#[derive(Debug, Error)]
pub enum TideError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("malformed field {field:?}: {reason}")]
    MalformedField { field: String, reason: String },

    #[error("message format error: {0}")]
    MessageFormat(String),
}

impl TideError {
    pub(crate) fn malformed(field: &str, reason: impl Into<String>) -> Self {
        TideError::MalformedField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
