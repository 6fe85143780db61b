use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{error::CrashScreen, layout::Layout},
    config::AppTimeZone,
    pages::{
        AttendancePage, BulkAttendancePage, DashboardPage, EmployeeDetailPage, EmployeeFormPage,
        EmployeeListPage, NotFoundPage, ReportsPage,
    },
    state::query::use_query,
};

/// Mounts once the runtime config is resolved, so `time_zone` already
/// reflects every config source.
pub fn mount_app(time_zone: AppTimeZone) {
    mount_to_body(move || app_root(time_zone));
}

pub fn provide_app_context(time_zone: AppTimeZone) {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(time_zone);
    use_query();
}

pub fn app_root(time_zone: AppTimeZone) -> impl IntoView {
    provide_app_context(time_zone);

    view! {
        <Title text="HRMS LITE"/>
        <Router>
            <Layout>
                <ErrorBoundary fallback=|errors| view! { <CrashScreen errors=errors/> }>
                    <Routes>
                        <Route path="/" view=DashboardPage/>
                        <Route path="/employees" view=EmployeeListPage/>
                        <Route path="/employees/new" view=EmployeeFormPage/>
                        <Route path="/employees/:id" view=EmployeeDetailPage/>
                        <Route path="/employees/:id/edit" view=EmployeeFormPage/>
                        <Route path="/attendance" view=AttendancePage/>
                        <Route path="/attendance/bulk" view=BulkAttendancePage/>
                        <Route path="/attendance/reports" view=ReportsPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </ErrorBoundary>
            </Layout>
        </Router>
    }
}
