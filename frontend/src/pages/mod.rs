pub mod attendance;
pub mod bulk_attendance;
pub mod dashboard;
pub mod employees;
pub mod not_found;
pub mod reports;

pub use attendance::AttendancePage;
pub use bulk_attendance::BulkAttendancePage;
pub use dashboard::DashboardPage;
pub use employees::{EmployeeDetailPage, EmployeeFormPage, EmployeeListPage};
pub use not_found::NotFoundPage;
pub use reports::ReportsPage;
