#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::{json, Value};

    pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    pub fn employee(id: &str, employee_id: &str, name: &str) -> Employee {
        let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Employee {
            id: id.into(),
            employee_id: employee_id.into(),
            full_name: name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: "Engineering".into(),
            created_at: stamp,
            updated_at: stamp,
            total_present_days: None,
        }
    }

    pub fn record(
        id: i64,
        employee: &Employee,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        AttendanceRecord {
            id,
            employee: employee.id.clone(),
            employee_name: employee.full_name.clone(),
            employee_id: employee.employee_id.clone(),
            date,
            status,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    pub fn employee_json(employee: &Employee) -> Value {
        serde_json::to_value(employee).expect("employee json")
    }

    pub fn record_json(record: &AttendanceRecord) -> Value {
        serde_json::to_value(record).expect("record json")
    }

    pub fn employees_json(employees: &[Employee]) -> Value {
        json!(employees.iter().map(employee_json).collect::<Vec<_>>())
    }
}
