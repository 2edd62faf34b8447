pub mod calculator;
pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;

pub use calculator::{DueDateCalculator, calculate_due_date};
pub use calendar::{WorkCalendar, WorkCalendarSummary};
pub use config::{AppConfig, ConfigError};
pub use error::{DueDateError, DueDateResult};
pub use request::{
    BatchSummary, DueDateOutcome, DueDateRequest, calculate_batch, calculate_batch_in,
};
