//! Marks every employee lacking a record for a day with one status.
//!
//! Requests go out one at a time. A failed item is logged and skipped so the
//! rest of the batch still runs; nothing is retried here.

use crate::api::{ApiError, AttendanceCreate, AttendanceRecord, AttendanceStatus, Employee};
use crate::pages::attendance::utils::MARK_FAILED;
use chrono::NaiveDate;
use log::{error, info};
use std::collections::HashSet;
use std::future::Future;

/// Employees with no record in `records`, in roster order.
pub fn unmarked_employees(employees: &[Employee], records: &[AttendanceRecord]) -> Vec<Employee> {
    let marked: HashSet<&str> = records.iter().map(|r| r.employee.as_str()).collect();
    employees
        .iter()
        .filter(|employee| !marked.contains(employee.id.as_str()))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkProgress {
    pub completed: usize,
    pub total: usize,
}

impl BulkProgress {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.completed * 100) / self.total) as u32
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkMarkFailure {
    pub employee_id: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkMarkReport {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<BulkMarkFailure>,
}

impl BulkMarkReport {
    pub fn is_noop(&self) -> bool {
        self.total == 0
    }
}

pub async fn run_bulk_mark<S, Fut, P>(
    unmarked: &[Employee],
    date: NaiveDate,
    status: AttendanceStatus,
    mut submit: S,
    mut on_progress: P,
) -> BulkMarkReport
where
    S: FnMut(AttendanceCreate) -> Fut,
    Fut: Future<Output = Result<AttendanceRecord, ApiError>>,
    P: FnMut(BulkProgress),
{
    let mut report = BulkMarkReport {
        total: unmarked.len(),
        ..BulkMarkReport::default()
    };
    if unmarked.is_empty() {
        return report;
    }

    for (index, employee) in unmarked.iter().enumerate() {
        let payload = AttendanceCreate {
            employee: employee.id.clone(),
            date,
            status,
        };
        match submit(payload).await {
            Ok(_) => report.succeeded += 1,
            Err(err) => {
                error!(
                    "Failed to mark attendance for {} on {}: {}",
                    employee.employee_id, date, err
                );
                report.failures.push(BulkMarkFailure {
                    employee_id: employee.employee_id.clone(),
                    message: err.general_message_or(MARK_FAILED),
                });
            }
        }
        on_progress(BulkProgress {
            completed: index + 1,
            total: report.total,
        });
    }

    info!(
        "Bulk marked {}/{} employees {} for {}",
        report.succeeded, report.total, status, date
    );
    report
}
