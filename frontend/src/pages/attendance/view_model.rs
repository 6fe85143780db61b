use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceStatus, Employee};
use crate::config::AppTimeZone;
use crate::pages::attendance::{
    repository,
    utils::{resolve_mark, DayRecords, MarkDate, MarkIntent},
};
use crate::pages::employees::repository::fetch_employees;
use crate::state::{
    query::{use_query, QueryContext},
    time_zone::use_time_zone,
    use_api,
};
use crate::utils::time::{format_date_input, today};
use chrono::NaiveDate;
use leptos::*;

/// Date picker state shared by both marking pages: the raw input plus its
/// parsed form, gated on today in the app time zone.
#[derive(Clone, Copy)]
pub struct MarkDatePicker {
    time_zone: AppTimeZone,
    pub input: RwSignal<String>,
    pub today: RwSignal<NaiveDate>,
    pub selection: Memo<MarkDate>,
}

impl MarkDatePicker {
    pub fn new(time_zone: AppTimeZone) -> Self {
        let today = create_rw_signal(today(time_zone));
        let input = create_rw_signal(format_date_input(today.get_untracked()));
        let selection = create_memo(move |_| {
            let today = today.get();
            input.with(|raw| MarkDate::parse(raw, today))
        });
        let picker = Self {
            time_zone,
            input,
            today,
            selection,
        };

        // Re-checked every minute so the day rolls over at local midnight.
        #[cfg(target_arch = "wasm32")]
        store_value(gloo_timers::callback::Interval::new(60_000, move || {
            picker.refresh_today()
        }));

        picker
    }

    pub fn refresh_today(&self) {
        self.roll_over(today(self.time_zone));
    }

    pub fn roll_over(&self, today: NaiveDate) {
        if self.today.get_untracked() != today {
            self.today.set(today);
        }
    }

    pub fn max(&self) -> Signal<String> {
        let today = self.today;
        Signal::derive(move || format_date_input(today.get()))
    }
}

pub type DayRecordsResource = Resource<(Option<NaiveDate>, u64), Result<DayRecords, ApiError>>;

/// Attendance for the picker's date, tagged with the date it was fetched for.
pub fn create_day_records(
    picker: MarkDatePicker,
    api: ApiClient,
    query: QueryContext,
) -> DayRecordsResource {
    let source = {
        let query = query.clone();
        move || (picker.selection.get().date(), query.generation())
    };
    create_resource(source, move |(date, _)| {
        let api = api.clone();
        let cache = query.client().clone();
        async move {
            let records = match date {
                Some(date) => repository::fetch_attendance_for_date(&api, &cache, date).await?,
                None => Vec::new(),
            };
            Ok::<_, ApiError>(DayRecords { date, records })
        }
    })
}

/// `None` while the selected date's records are loading, including the
/// window where the resource still holds the previous date.
pub fn selected_day_records(
    picker: MarkDatePicker,
    records: DayRecordsResource,
) -> Signal<Option<Result<Vec<AttendanceRecord>, ApiError>>> {
    Signal::derive(move || {
        let selected = picker.selection.get().date();
        match records.get()? {
            Ok(day) => day.for_selection(selected).map(Ok),
            Err(err) => Some(Err(err)),
        }
    })
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub picker: MarkDatePicker,
    pub employees: Resource<u64, Result<Vec<Employee>, ApiError>>,
    pub records: DayRecordsResource,
    pub mark_action: Action<MarkIntent, Result<AttendanceRecord, String>>,
}

impl AttendanceViewModel {
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
                async move { fetch_employees(&api, &cache).await }
            },
        );

        let records = create_day_records(picker, api.clone(), query.clone());

        let mark_action = create_action(move |intent: &MarkIntent| {
            let api = api.clone();
            let cache = query.client().clone();
            let intent = intent.clone();
            async move {
                repository::submit_mark(&api, &cache, &intent)
                    .await
                    .map_err(|err| err.general_message_or(intent.fallback_message()))
            }
        });

        Self {
            picker,
            employees,
            records,
            mark_action,
        }
    }

    pub fn day_records(&self) -> Signal<Option<Result<Vec<AttendanceRecord>, ApiError>>> {
        selected_day_records(self.picker, self.records)
    }

    /// Marking needs a past-or-present date whose records have loaded.
    pub fn can_mark(&self) -> Signal<bool> {
        let selection = self.picker.selection;
        let pending = self.mark_action.pending();
        let records = self.day_records();
        Signal::derive(move || {
            selection.get().allows_marking()
                && matches!(records.get(), Some(Ok(_)))
                && !pending.get()
        })
    }

    /// The last mark's failure; cleared by the next success.
    pub fn error(&self) -> Signal<Option<String>> {
        let value = self.mark_action.value();
        Signal::derive(move || value.get().and_then(Result::err))
    }

    /// Create or update for `employee`, resolved against the selected date's
    /// own records. `None` while marking is not possible.
    pub fn intent_for(&self, employee: &str, status: AttendanceStatus) -> Option<MarkIntent> {
        if self.mark_action.pending().get_untracked() {
            return None;
        }
        self.picker.refresh_today();
        let MarkDate::Ready(date) = self.picker.selection.get_untracked() else {
            return None;
        };
        let Some(Ok(records)) = self.day_records().get_untracked() else {
            return None;
        };
        Some(resolve_mark(&records, employee, date, status))
    }

    pub fn mark(&self, employee: String, status: AttendanceStatus) {
        if let Some(intent) = self.intent_for(&employee, status) {
            self.mark_action.dispatch(intent);
        }
    }
}
