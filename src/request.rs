use chrono::NaiveDateTime;
use rayon::ThreadPool;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculator::DueDateCalculator;
use crate::error::{DueDateError, DueDateResult};

/// One due date calculation in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateRequest {
    pub id: u32,
    #[serde(default)]
    pub submitted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub turnaround_hours: Option<u64>,
}

impl DueDateRequest {
    pub fn new(id: u32, submitted_at: NaiveDateTime, turnaround_hours: u64) -> Self {
        Self {
            id,
            submitted_at: Some(submitted_at),
            turnaround_hours: Some(turnaround_hours),
        }
    }
}

/// The resolved due date or the error code for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateOutcome {
    pub id: u32,
    pub submitted_at: Option<NaiveDateTime>,
    pub turnaround_hours: Option<u64>,
    pub due_at: Option<NaiveDateTime>,
    pub error: Option<String>,
}

impl DueDateOutcome {
    pub fn from_result(request: &DueDateRequest, result: DueDateResult<NaiveDateTime>) -> Self {
        let (due_at, error) = match result {
            Ok(due) => (Some(due), None),
            Err(err) => (None, Some(err.code().to_string())),
        };
        Self {
            id: request.id,
            submitted_at: request.submitted_at,
            turnaround_hours: request.turnaround_hours,
            due_at,
            error,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn error_kind(&self) -> Option<DueDateError> {
        self.error.as_deref().and_then(DueDateError::from_code)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub resolved: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[DueDateOutcome]) -> Self {
        let resolved = outcomes.iter().filter(|o| o.is_resolved()).count();
        Self {
            total: outcomes.len(),
            resolved,
            rejected: outcomes.len() - resolved,
        }
    }

    pub fn to_summary_line(&self) -> String {
        format!(
            "total={}, resolved={}, rejected={}",
            self.total, self.resolved, self.rejected
        )
    }
}

/// Evaluate every request in parallel. Outcomes keep the order of `requests`.
pub fn calculate_batch(
    calculator: &DueDateCalculator,
    requests: &[DueDateRequest],
) -> Vec<DueDateOutcome> {
    requests
        .par_iter()
        .map(|request| {
            let result = calculator.calculate(request.submitted_at, request.turnaround_hours);
            if let Err(err) = &result {
                tracing::warn!(id = request.id, error = %err, "request rejected");
            }
            DueDateOutcome::from_result(request, result)
        })
        .collect()
}

/// Like [`calculate_batch`], but on a caller-supplied pool (see
/// [`AppConfig::build_thread_pool`](crate::AppConfig::build_thread_pool)).
pub fn calculate_batch_in(
    pool: &ThreadPool,
    calculator: &DueDateCalculator,
    requests: &[DueDateRequest],
) -> Vec<DueDateOutcome> {
    pool.install(|| calculate_batch(calculator, requests))
}
