use crate::api::{AttendanceCreate, AttendanceRecord, AttendanceStatus, AttendanceUpdate};
use crate::utils::time::{is_future_date, parse_date_input};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const MARK_FAILED: &str = "Failed to mark attendance";
pub const UPDATE_FAILED: &str = "Failed to update attendance";
pub const FUTURE_DATE_MESSAGE: &str = "CANNOT SELECT FUTURE DATE";

/// The date picker's value checked against "today" in the app zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkDate {
    Ready(NaiveDate),
    Future(NaiveDate),
    Invalid,
}

impl MarkDate {
    pub fn parse(raw: &str, today: NaiveDate) -> Self {
        match parse_date_input(raw) {
            Some(date) if is_future_date(date, today) => MarkDate::Future(date),
            Some(date) => MarkDate::Ready(date),
            None => MarkDate::Invalid,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            MarkDate::Ready(date) | MarkDate::Future(date) => Some(*date),
            MarkDate::Invalid => None,
        }
    }

    pub fn allows_marking(&self) -> bool {
        matches!(self, MarkDate::Ready(_))
    }

    pub fn is_future(&self) -> bool {
        matches!(self, MarkDate::Future(_))
    }
}

/// Attendance fetched for one picker date. Marking pages act on it only while
/// that date is still the selected one.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DayRecords {
    pub date: Option<NaiveDate>,
    pub records: Vec<AttendanceRecord>,
}

impl DayRecords {
    pub fn for_selection(self, selected: Option<NaiveDate>) -> Option<Vec<AttendanceRecord>> {
        (self.date == selected).then_some(self.records)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkIntent {
    Create(AttendanceCreate),
    Update { id: i64, update: AttendanceUpdate },
}

impl MarkIntent {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            MarkIntent::Create(_) => MARK_FAILED,
            MarkIntent::Update { .. } => UPDATE_FAILED,
        }
    }
}

pub fn find_record<'a>(
    records: &'a [AttendanceRecord],
    employee: &str,
    date: NaiveDate,
) -> Option<&'a AttendanceRecord> {
    records
        .iter()
        .find(|record| record.employee == employee && record.date == date)
}

/// An existing record for the employee on `date` is updated in place;
/// otherwise a new one is created.
pub fn resolve_mark(
    records: &[AttendanceRecord],
    employee: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> MarkIntent {
    match find_record(records, employee, date) {
        Some(existing) => MarkIntent::Update {
            id: existing.id,
            update: AttendanceUpdate { status },
        },
        None => MarkIntent::Create(AttendanceCreate {
            employee: employee.to_string(),
            date,
            status,
        }),
    }
}

pub fn statuses_by_employee(records: &[AttendanceRecord]) -> HashMap<String, AttendanceStatus> {
    records
        .iter()
        .map(|record| (record.employee.clone(), record.status))
        .collect()
}

pub fn status_text_class(status: Option<AttendanceStatus>) -> &'static str {
    match status {
        Some(AttendanceStatus::Present) => "text-systemGreen",
        Some(AttendanceStatus::Absent) => "text-systemRed",
        None => "text-systemYellow",
    }
}

pub fn status_label(status: Option<AttendanceStatus>) -> &'static str {
    status.map(|s| s.as_str()).unwrap_or("UNMARKED")
}

/// Dims the button that matches the status already recorded.
pub fn mark_button_class(current: Option<AttendanceStatus>, target: AttendanceStatus) -> &'static str {
    if current == Some(target) {
        "opacity-50"
    } else {
        ""
    }
}
