use chrono::{DateTime, NaiveDate, Utc};

use crate::config::AppTimeZone;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

pub fn today_in(tz: AppTimeZone, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz.tz()).date_naive()
}

pub fn today(tz: AppTimeZone) -> NaiveDate {
    today_in(tz, Utc::now())
}

/// Marking is only allowed up to and including `today`.
pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

pub fn format_clock(tz: AppTimeZone, now: DateTime<Utc>) -> String {
    now.with_timezone(&tz.tz()).format(DISPLAY_FORMAT).to_string()
}

pub fn format_timestamp(tz: AppTimeZone, value: &DateTime<Utc>) -> String {
    format_clock(tz, *value)
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}
