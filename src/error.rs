use thiserror::Error;

/// Reasons a due date cannot be resolved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateError {
    #[error("submit date is missing")]
    SubmitDateMissing,

    #[error("submit date is outside working hours (09:00-17:00)")]
    OutOfWorkingHours,

    #[error("submit date is not a working day (Monday-Friday)")]
    NotWorkingDay,

    #[error("turnaround time is missing")]
    TurnaroundTimeMissing,

    #[error("due date is outside the supported date range")]
    OutOfRange,
}

impl DueDateError {
    /// Stable machine-readable code used in batch outcomes and API responses
    pub fn code(&self) -> &'static str {
        match self {
            DueDateError::SubmitDateMissing => "submit_date_missing",
            DueDateError::OutOfWorkingHours => "out_of_working_hours",
            DueDateError::NotWorkingDay => "not_working_day",
            DueDateError::TurnaroundTimeMissing => "turnaround_time_missing",
            DueDateError::OutOfRange => "out_of_range",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "submit_date_missing" => Some(DueDateError::SubmitDateMissing),
            "out_of_working_hours" => Some(DueDateError::OutOfWorkingHours),
            "not_working_day" => Some(DueDateError::NotWorkingDay),
            "turnaround_time_missing" => Some(DueDateError::TurnaroundTimeMissing),
            "out_of_range" => Some(DueDateError::OutOfRange),
            _ => None,
        }
    }
}

pub type DueDateResult<T> = Result<T, DueDateError>;
