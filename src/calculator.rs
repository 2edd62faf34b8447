use chrono::{Duration, NaiveDateTime, Timelike};
use tracing::{debug, trace};

use crate::calendar::{
    HOURS_PER_WORKING_DAY, HOURS_PER_WORKING_WEEK, WEEKEND_DAYS, WORK_END_HOUR, WORK_START_HOUR,
    WorkCalendar,
};
use crate::error::{DueDateError, DueDateResult};

/// Resolves due dates against the fixed working calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct DueDateCalculator {
    calendar: WorkCalendar,
}

impl DueDateCalculator {
    pub fn new() -> Self {
        Self {
            calendar: WorkCalendar::new(),
        }
    }

    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    /// Add `turnaround_hours` working hours to `submit_date`.
    ///
    /// Inputs are checked in order (submit date present, inside working hours,
    /// on a working day, turnaround present) and the first failure is returned.
    pub fn calculate(
        &self,
        submit_date: Option<NaiveDateTime>,
        turnaround_hours: Option<u64>,
    ) -> DueDateResult<NaiveDateTime> {
        let submit_date = self.validate_submit_date(submit_date)?;
        let turnaround = turnaround_hours.ok_or(DueDateError::TurnaroundTimeMissing)?;

        let within_day = add_intraday_hours(submit_date, turnaround)?;
        let with_days = add_days(within_day, whole_days(turnaround))?;
        let due = add_days(with_days, weekend_days(turnaround))?;

        debug!(%submit_date, turnaround, %due, "resolved due date");
        Ok(due)
    }

    /// Run the submit date checks on their own.
    pub fn validate_submit_date(
        &self,
        submit_date: Option<NaiveDateTime>,
    ) -> DueDateResult<NaiveDateTime> {
        let submit_date = submit_date.ok_or(DueDateError::SubmitDateMissing)?;
        if !self.calendar.is_within_working_hours(submit_date.time()) {
            return Err(DueDateError::OutOfWorkingHours);
        }
        if !self.calendar.is_working_day(submit_date.date()) {
            return Err(DueDateError::NotWorkingDay);
        }
        Ok(submit_date)
    }
}

/// Convenience wrapper around [`DueDateCalculator::calculate`].
pub fn calculate_due_date(
    submit_date: Option<NaiveDateTime>,
    turnaround_hours: Option<u64>,
) -> DueDateResult<NaiveDateTime> {
    DueDateCalculator::new().calculate(submit_date, turnaround_hours)
}

/// Hours added within the day. A non-zero multiple of a working day counts as a
/// full day so the result lands at end of day.
fn intraday_hours(turnaround: u64) -> u64 {
    let remainder = turnaround % HOURS_PER_WORKING_DAY;
    if turnaround > 0 && remainder == 0 {
        HOURS_PER_WORKING_DAY
    } else {
        remainder
    }
}

fn add_intraday_hours(
    submit_date: NaiveDateTime,
    turnaround: u64,
) -> DueDateResult<NaiveDateTime> {
    let hours = intraday_hours(turnaround);
    let end_hour = u64::from(submit_date.hour()) + hours;

    if end_hour > u64::from(WORK_END_HOUR) {
        let overtime = end_hour - u64::from(WORK_END_HOUR);
        trace!(overtime, "rolling overtime into next day");
        let next_morning = add_days(submit_date, 1)?
            .with_hour(WORK_START_HOUR)
            .ok_or(DueDateError::OutOfRange)?;
        add_hours(next_morning, overtime)
    } else {
        add_hours(submit_date, hours)
    }
}

/// Calendar days covered by the turnaround beyond the first working day.
fn whole_days(turnaround: u64) -> u64 {
    if turnaround <= HOURS_PER_WORKING_DAY {
        0
    } else if turnaround % HOURS_PER_WORKING_DAY == 0 {
        turnaround / HOURS_PER_WORKING_DAY - 1
    } else {
        turnaround / HOURS_PER_WORKING_DAY
    }
}

/// Weekend days skipped for turnarounds longer than a working week. An exact
/// multiple of a week already lands on a Friday and keeps one weekend fewer.
fn weekend_days(turnaround: u64) -> i64 {
    if turnaround <= HOURS_PER_WORKING_WEEK {
        return 0;
    }
    let weeks = i64::try_from(turnaround / HOURS_PER_WORKING_WEEK).unwrap_or(i64::MAX);
    let mut days = weeks.saturating_mul(WEEKEND_DAYS);
    if turnaround % HOURS_PER_WORKING_WEEK == 0 {
        days -= WEEKEND_DAYS;
    }
    days
}

fn add_hours(timestamp: NaiveDateTime, hours: u64) -> DueDateResult<NaiveDateTime> {
    let hours = i64::try_from(hours).map_err(|_| DueDateError::OutOfRange)?;
    let delta = Duration::try_hours(hours).ok_or(DueDateError::OutOfRange)?;
    timestamp
        .checked_add_signed(delta)
        .ok_or(DueDateError::OutOfRange)
}

fn add_days<N>(timestamp: NaiveDateTime, days: N) -> DueDateResult<NaiveDateTime>
where
    N: TryInto<i64>,
{
    let days = days.try_into().map_err(|_| DueDateError::OutOfRange)?;
    let delta = Duration::try_days(days).ok_or(DueDateError::OutOfRange)?;
    timestamp
        .checked_add_signed(delta)
        .ok_or(DueDateError::OutOfRange)
}
