use crate::api::{ApiError, AttendanceRecord};
use crate::pages::reports::{
    repository,
    utils::{filter_by_range, DateRange, StatusFilter},
};
use crate::state::{query::use_query, time_zone::use_time_zone, use_api};
use crate::utils::time::{format_date_input, today};
use leptos::*;

type ReportSource = (Option<DateRange>, StatusFilter, u64);

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub from: RwSignal<String>,
    pub to: RwSignal<String>,
    pub status: RwSignal<StatusFilter>,
    pub max_date: StoredValue<String>,
    /// Range of the last accepted search; `None` until SEARCH is pressed.
    pub searched: RwSignal<Option<DateRange>>,
    pub range_error: RwSignal<Option<String>>,
    pub report: Resource<ReportSource, Option<Result<Vec<AttendanceRecord>, ApiError>>>,
}

impl ReportsViewModel {
    pub fn new() -> Self {
        let api = use_api();
        let query = use_query();
        let searched = create_rw_signal(None::<DateRange>);
        let status = create_rw_signal(StatusFilter::All);

        let query_source = query.clone();
        let report = create_resource(
            move || (searched.get(), status.get(), query_source.generation()),
            move |(range, status, _): ReportSource| {
                let api = api.clone();
                let cache = query.client().clone();
                async move {
                    let range = range?;
                    Some(
                        repository::fetch_report(&api, &cache, status.as_status())
                            .await
                            .map(|records| filter_by_range(records, &range)),
                    )
                }
            },
        );

        Self {
            from: create_rw_signal(String::new()),
            to: create_rw_signal(String::new()),
            status,
            max_date: store_value(format_date_input(today(use_time_zone()))),
            searched,
            range_error: create_rw_signal(None),
            report,
        }
    }

    pub fn search(&self) {
        match DateRange::parse(&self.from.get_untracked(), &self.to.get_untracked()) {
            Ok(range) => {
                self.range_error.set(None);
                self.searched.set(Some(range));
            }
            Err(message) => self.range_error.set(Some(message)),
        }
    }

    pub fn set_status(&self, value: &str) {
        self.status.set(StatusFilter::from_value(value));
    }
}
