//! Schedule loading errors.
//!
//! Both variants are recoverable by the caller: a missing stand sends the
//! user back to stand selection, a failed load can be retried as-is.

/// Errors from loading a stand's schedule dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// No dataset exists for the stand
    #[error("no schedule data for stand {stand}")]
    NotFound { stand: String },

    /// The dataset exists but could not be read or parsed
    #[error("failed to load schedules for stand {stand}: {message}")]
    Load { stand: String, message: String },
}

impl ScheduleError {
    pub fn not_found(stand: impl Into<String>) -> Self {
        ScheduleError::NotFound {
            stand: stand.into(),
        }
    }

    pub fn load(stand: impl Into<String>, message: impl Into<String>) -> Self {
        ScheduleError::Load {
            stand: stand.into(),
            message: message.into(),
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScheduleError::Load { .. })
    }
}
