/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Malformed *records* never surface here: the aggregation engine degrades
/// gracefully on bad data. Errors are reserved for caller mistakes such as
/// an invalid view-mode/period combination.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for report parameters
    #[error("Validation error: {0}")]
    Validation(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}
