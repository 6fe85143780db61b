use crate::api::{ApiError, AttendanceRecord, AttendanceStatus, Employee};
use crate::pages::attendance::{
    utils::MarkDate,
    view_model::{create_day_records, selected_day_records, DayRecordsResource, MarkDatePicker},
};
use crate::pages::bulk_attendance::{
    reconcile::{unmarked_employees, BulkMarkReport, BulkProgress},
    repository,
};
use crate::state::{query::use_query, time_zone::use_time_zone, use_api};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkRun {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub unmarked: Vec<Employee>,
}

/// Roster counts for the selected day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DaySummary {
    pub total: usize,
    pub unmarked: Vec<Employee>,
}

impl DaySummary {
    pub fn from_lists(employees: &[Employee], records: &[AttendanceRecord]) -> Self {
        Self {
            total: employees.len(),
            unmarked: unmarked_employees(employees, records),
        }
    }

    pub fn marked(&self) -> usize {
        self.total - self.unmarked.len()
    }
}

#[derive(Clone, Copy)]
pub struct BulkAttendanceViewModel {
    pub picker: MarkDatePicker,
    pub employees: Resource<u64, Result<Vec<Employee>, ApiError>>,
    pub records: DayRecordsResource,
    pub progress: RwSignal<Option<BulkProgress>>,
    pub run_action: Action<BulkRun, BulkMarkReport>,
}

impl BulkAttendanceViewModel {
    pub fn new() -> Self {
        let api = use_api();
        let query = use_query();
        let picker = MarkDatePicker::new(use_time_zone());

        let (api_emp, query_emp) = (api.clone(), query.clone());
        let employees = create_resource(
            {
                let query = query.clone();
                move || query.generation()
            },
            move |_| {
                let api = api_emp.clone();
                let cache = query_emp.client().clone();
                async move { repository::fetch_employees(&api, &cache).await }
            },
        );

        let records = create_day_records(picker, api.clone(), query.clone());

        let progress = create_rw_signal(None::<BulkProgress>);
        let run_action = create_action(move |run: &BulkRun| {
            let api = api.clone();
            let cache = query.client().clone();
            let run = run.clone();
            progress.set(Some(BulkProgress {
                completed: 0,
                total: run.unmarked.len(),
            }));
            async move {
                repository::mark_unmarked(
                    &api,
                    &cache,
                    &run.unmarked,
                    run.date,
                    run.status,
                    |p| progress.set(Some(p)),
                )
                .await
            }
        });

        Self {
            picker,
            employees,
            records,
            progress,
            run_action,
        }
    }

    /// `None` until the employees and the selected day's own records have
    /// loaded.
    pub fn summary(&self) -> Signal<Option<Result<DaySummary, ApiError>>> {
        let employees = self.employees;
        let records = selected_day_records(self.picker, self.records);
        Signal::derive(move || match (employees.get()?, records.get()?) {
            (Ok(employees), Ok(records)) => Some(Ok(DaySummary::from_lists(&employees, &records))),
            (Err(err), _) | (_, Err(err)) => Some(Err(err)),
        })
    }

    pub fn running(&self) -> Signal<bool> {
        self.run_action.pending().into()
    }

    pub fn can_run(&self) -> Signal<bool> {
        let selection = self.picker.selection;
        let pending = self.run_action.pending();
        let summary = self.summary();
        Signal::derive(move || {
            selection.get().allows_marking()
                && matches!(summary.get(), Some(Ok(_)))
                && !pending.get()
        })
    }

    /// The batch `mark_all` would send; `None` when there is nothing to do
    /// or the selected day's records are not loaded yet.
    pub fn next_run(&self, status: AttendanceStatus) -> Option<BulkRun> {
        if self.run_action.pending().get_untracked() {
            return None;
        }
        self.picker.refresh_today();
        let MarkDate::Ready(date) = self.picker.selection.get_untracked() else {
            return None;
        };
        let Some(Ok(summary)) = self.summary().get_untracked() else {
            return None;
        };
        if summary.unmarked.is_empty() {
            return None;
        }
        Some(BulkRun {
            date,
            status,
            unmarked: summary.unmarked,
        })
    }

    pub fn mark_all(&self, status: AttendanceStatus) {
        if let Some(run) = self.next_run(status) {
            self.run_action.dispatch(run);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::attendance::utils::DayRecords;
    use crate::test_support::helpers::{day, employee, record};
    use crate::test_support::ssr::with_runtime;
    use crate::utils::time::format_date_input;

    #[test]
    fn day_summary_counts_marked_and_unmarked() {
        let a = employee("e1", "EMP-001", "A");
        let b = employee("e2", "EMP-002", "B");
        let summary = DaySummary::from_lists(
            &[a.clone(), b.clone()],
            &[record(1, &a, day(2024, 1, 15), AttendanceStatus::Present)],
        );
        assert_eq!(summary.total, 2);
        assert_eq!(summary.marked(), 1);
        assert_eq!(summary.unmarked, vec![b]);
    }

    #[test]
    fn nothing_runs_before_data_loads() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = BulkAttendanceViewModel::new();
            assert!(vm.summary().get_untracked().is_none());
            vm.mark_all(AttendanceStatus::Present);
            assert!(vm.run_action.input().get_untracked().is_none());
            assert!(vm.progress.get_untracked().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    fn loaded(vm: &BulkAttendanceViewModel, date: NaiveDate, records: Vec<AttendanceRecord>) {
        vm.employees
            .set(Ok(vec![employee("e1", "EMP-001", "Asha Rao")]));
        vm.records.set(Ok(DayRecords {
            date: Some(date),
            records,
        }));
    }

    #[test]
    fn future_date_disables_bulk_actions() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = BulkAttendanceViewModel::new();
            let today = vm.picker.today.get_untracked();
            loaded(&vm, today, Vec::new());
            assert!(vm.can_run().get_untracked());
            vm.picker
                .input
                .set(format_date_input(today.succ_opt().unwrap()));
            assert!(!vm.can_run().get_untracked());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn switching_dates_waits_for_that_days_records() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = BulkAttendanceViewModel::new();
            let today = vm.picker.today.get_untracked();
            let yesterday = today.pred_opt().unwrap();
            loaded(&vm, today, Vec::new());
            assert_eq!(
                vm.next_run(AttendanceStatus::Present).map(|run| run.unmarked.len()),
                Some(1)
            );

            vm.picker.input.set(format_date_input(yesterday));
            assert_eq!(vm.summary().get_untracked(), None);
            assert!(!vm.can_run().get_untracked());
            assert_eq!(vm.next_run(AttendanceStatus::Present), None);

            let asha = employee("e1", "EMP-001", "Asha Rao");
            loaded(
                &vm,
                yesterday,
                vec![record(3, &asha, yesterday, AttendanceStatus::Present)],
            );
            let summary = vm.summary().get_untracked().unwrap().unwrap();
            assert!(summary.unmarked.is_empty());
            assert_eq!(vm.next_run(AttendanceStatus::Present), None);
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
