pub mod components;
pub mod panel;
pub mod reconcile;
pub mod repository;
pub mod view_model;

pub use panel::BulkAttendancePage;
