use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub total_present_days: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub employee: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub status: AttendanceStatus,
}

/// Filters for `GET /attendance/`. Unset filters are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
}

impl AttendanceQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    pub fn for_employee(employee: impl Into<String>) -> Self {
        Self {
            employee: Some(employee.into()),
            ..Default::default()
        }
    }

    pub fn with_status(status: Option<AttendanceStatus>) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayStats {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub absent: u32,
    #[serde(default)]
    pub unmarked: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: u32,
    #[serde(default)]
    pub today_stats: TodayStats,
}

pub const CODE_NETWORK: &str = "NETWORK_ERROR";
pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_SERVER: &str = "SERVER_ERROR";
pub const CODE_PARSE: &str = "PARSE_ERROR";
pub const CODE_UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw response body as sent by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_VALIDATION)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_UNKNOWN)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_NETWORK)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_PARSE)
    }

    /// Builds an error from a non-success HTTP response.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let code = match status {
            404 => CODE_NOT_FOUND,
            400..=499 => CODE_VALIDATION,
            500..=599 => CODE_SERVER,
            _ => CODE_UNKNOWN,
        };
        let error = body
            .as_ref()
            .map(ErrorBody::decode)
            .and_then(|decoded| decoded.general_message())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self {
            error,
            code: code.to_string(),
            status: Some(status),
            details: body,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == CODE_NOT_FOUND
    }

    /// Transport failures and 5xx responses may succeed on a second attempt.
    pub fn is_retryable(&self) -> bool {
        self.code == CODE_NETWORK || self.code == CODE_SERVER
    }

    pub fn body(&self) -> Option<ErrorBody> {
        self.details.as_ref().map(ErrorBody::decode)
    }

    /// One line for pages without per-field slots; `fallback` when the body
    /// carried nothing usable.
    pub fn general_message_or(&self, fallback: &str) -> String {
        self.body()
            .and_then(|body| body.general_message())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Decoded shape of a server error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    Message(String),
    Detail(String),
    NonField(String),
    Fields(Vec<(String, String)>),
    Unrecognized,
}

impl ErrorBody {
    pub fn decode(raw: &Value) -> Self {
        match raw {
            Value::String(message) => Self::Message(message.clone()),
            Value::Object(map) => {
                if let Some(detail) = map.get("detail").and_then(first_message) {
                    return Self::Detail(detail);
                }
                if let Some(message) = map.get("non_field_errors").and_then(first_message) {
                    return Self::NonField(message);
                }
                let fields: Vec<(String, String)> = map
                    .iter()
                    .filter_map(|(key, value)| first_message(value).map(|msg| (key.clone(), msg)))
                    .collect();
                if fields.is_empty() {
                    Self::Unrecognized
                } else {
                    Self::Fields(fields)
                }
            }
            _ => Self::Unrecognized,
        }
    }

    /// The single message shown by pages that have no per-field slots.
    pub fn general_message(&self) -> Option<String> {
        match self {
            Self::Message(msg) | Self::Detail(msg) | Self::NonField(msg) => Some(msg.clone()),
            Self::Fields(fields) => fields.first().map(|(_, msg)| msg.clone()),
            Self::Unrecognized => None,
        }
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(|v| v.as_str()).map(str::to_string),
        _ => None,
    }
}

/// Per-field messages plus one general slot, as rendered by forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub fields: BTreeMap<String, String>,
    pub general: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.fields.insert(field.to_string(), message.into());
    }

    pub fn clear_field(&mut self, field: &str) {
        self.fields.remove(field);
    }

    /// Maps a failed submission back onto the form; `fallback` is used when
    /// the server said nothing usable.
    pub fn from_api_error(error: &ApiError, fallback: &str) -> Self {
        match error.body() {
            Some(body) => Self::from_body(body, fallback),
            None => Self {
                general: Some(fallback.to_string()),
                ..Self::default()
            },
        }
    }

    pub fn from_body(body: ErrorBody, fallback: &str) -> Self {
        let mut errors = Self::default();
        match body {
            ErrorBody::Fields(fields) => {
                for (field, message) in fields {
                    errors.fields.insert(field, message);
                }
            }
            ErrorBody::Message(msg) | ErrorBody::Detail(msg) | ErrorBody::NonField(msg) => {
                errors.general = Some(msg);
            }
            ErrorBody::Unrecognized => {
                errors.general = Some(fallback.to_string());
            }
        }
        errors
    }
}
