use chrono::{Datelike, Days, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Hour of day at which a working day starts
pub const WORK_START_HOUR: u32 = 9;
/// Hour of day at which a working day ends (17:00:00 itself is still working time)
pub const WORK_END_HOUR: u32 = 17;
pub const HOURS_PER_WORKING_DAY: u64 = (WORK_END_HOUR - WORK_START_HOUR) as u64;
pub const WORKING_DAYS_PER_WEEK: u64 = 5;
pub const HOURS_PER_WORKING_WEEK: u64 = HOURS_PER_WORKING_DAY * WORKING_DAYS_PER_WEEK;
pub const WEEKEND_DAYS: i64 = 2;

/// The fixed working calendar: Monday to Friday, 09:00 to 17:00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkCalendar;

/// Serializable description of the working calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendarSummary {
    pub working_days: Vec<Weekday>,
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    pub hours_per_day: u64,
    pub hours_per_week: u64,
}

impl WorkCalendar {
    const WORKING_DAYS: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn new() -> Self {
        Self
    }

    pub fn working_days(&self) -> [Weekday; 5] {
        Self::WORKING_DAYS
    }

    /// Check if a date falls on a business day
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        Self::WORKING_DAYS.contains(&date.weekday())
    }

    /// Check if a time of day is inside the working window.
    /// 17:00:00 exactly counts as the inclusive end of the day.
    pub fn is_within_working_hours(&self, time: NaiveTime) -> bool {
        let hour = time.hour();
        if (WORK_START_HOUR..WORK_END_HOUR).contains(&hour) {
            return true;
        }
        hour == WORK_END_HOUR
            && time.minute() == 0
            && time.second() == 0
            && time.nanosecond() == 0
    }

    /// Find the next working day after a given date, or `None` past the end of
    /// chrono's date range
    pub fn next_working_day(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut current = from.checked_add_days(Days::new(1))?;
        while !self.is_working_day(current) {
            current = current.checked_add_days(Days::new(1))?;
        }
        Some(current)
    }

    pub fn work_start(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(WORK_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn work_end(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(WORK_END_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn summary(&self) -> WorkCalendarSummary {
        WorkCalendarSummary::from(self)
    }
}

impl From<&WorkCalendar> for WorkCalendarSummary {
    fn from(calendar: &WorkCalendar) -> Self {
        Self {
            working_days: calendar.working_days().to_vec(),
            work_start: calendar.work_start(),
            work_end: calendar.work_end(),
            hours_per_day: HOURS_PER_WORKING_DAY,
            hours_per_week: HOURS_PER_WORKING_WEEK,
        }
    }
}
