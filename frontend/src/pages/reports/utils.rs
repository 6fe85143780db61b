use crate::api::{AttendanceRecord, AttendanceStatus};
use crate::utils::time::parse_date_input;
use chrono::NaiveDate;

pub const RANGE_ORDER_MESSAGE: &str = "FROM DATE MUST BE ON OR BEFORE TO DATE";
pub const INVALID_DATE_MESSAGE: &str = "INVALID DATE";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Present,
    Absent,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Present, StatusFilter::Absent];

    pub fn as_status(&self) -> Option<AttendanceStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Present => Some(AttendanceStatus::Present),
            StatusFilter::Absent => Some(AttendanceStatus::Absent),
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Present => "PRESENT",
            StatusFilter::Absent => "ABSENT",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "PRESENT" => StatusFilter::Present,
            "ABSENT" => StatusFilter::Absent,
            _ => StatusFilter::All,
        }
    }
}

/// Inclusive on both ends; a missing bound is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn parse(from: &str, to: &str) -> Result<Self, String> {
        let range = Self {
            from: parse_bound(from)?,
            to: parse_bound(to)?,
        };
        match (range.from, range.to) {
            (Some(from), Some(to)) if from > to => Err(RANGE_ORDER_MESSAGE.to_string()),
            _ => Ok(range),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

fn parse_bound(raw: &str) -> Result<Option<NaiveDate>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date_input(raw)
        .map(Some)
        .ok_or_else(|| INVALID_DATE_MESSAGE.to_string())
}

pub fn filter_by_range(records: Vec<AttendanceRecord>, range: &DateRange) -> Vec<AttendanceRecord> {
    records
        .into_iter()
        .filter(|record| range.contains(record.date))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

impl ReportStats {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.total += 1;
            match record.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Absent => stats.absent += 1,
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{day, employee, record};

    #[test]
    fn status_filter_round_trips_select_values() {
        for filter in StatusFilter::ALL {
            assert_eq!(StatusFilter::from_value(filter.value()), filter);
        }
        assert_eq!(StatusFilter::from_value("bogus"), StatusFilter::All);
        assert_eq!(StatusFilter::All.as_status(), None);
        assert_eq!(StatusFilter::Absent.as_status(), Some(AttendanceStatus::Absent));
    }

    #[test]
    fn range_parsing_allows_open_bounds_and_rejects_inverted() {
        assert_eq!(DateRange::parse("", "").unwrap(), DateRange::default());
        let range = DateRange::parse("2024-01-10", "").unwrap();
        assert_eq!(range.from, Some(day(2024, 1, 10)));
        assert_eq!(range.to, None);
        assert_eq!(
            DateRange::parse("2024-01-16", "2024-01-15").unwrap_err(),
            RANGE_ORDER_MESSAGE
        );
        assert_eq!(DateRange::parse("2024-13-01", "").unwrap_err(), INVALID_DATE_MESSAGE);
        assert!(DateRange::parse("2024-01-15", "2024-01-15").is_ok());
    }

    #[test]
    fn range_filter_is_inclusive() {
        let asha = employee("e1", "EMP-001", "Asha Rao");
        let records: Vec<_> = (9..=17)
            .map(|d| record(d as i64, &asha, day(2024, 1, d), AttendanceStatus::Present))
            .collect();
        let range = DateRange::parse("2024-01-10", "2024-01-15").unwrap();

        let kept = filter_by_range(records, &range);
        assert_eq!(kept.len(), 6);
        assert_eq!(kept.first().unwrap().date, day(2024, 1, 10));
        assert_eq!(kept.last().unwrap().date, day(2024, 1, 15));
    }

    #[test]
    fn stats_split_by_status() {
        let asha = employee("e1", "EMP-001", "Asha Rao");
        let records = vec![
            record(1, &asha, day(2024, 1, 15), AttendanceStatus::Present),
            record(2, &asha, day(2024, 1, 16), AttendanceStatus::Absent),
            record(3, &asha, day(2024, 1, 17), AttendanceStatus::Present),
        ];
        assert_eq!(
            ReportStats::from_records(&records),
            ReportStats {
                total: 3,
                present: 2,
                absent: 1
            }
        );
    }
}
