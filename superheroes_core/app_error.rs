use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid selection at index {index}, list has {len} super heroes")]
    InvalidSelection { index: usize, len: usize },

    #[error("Navigation channel closed")]
    NavigationClosed,

    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
