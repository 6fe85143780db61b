use crate::api::{ApiError, DashboardStats};
use crate::components::cards::StatTone;
use crate::config::AppTimeZone;
use crate::pages::dashboard::repository;
use crate::state::{query::use_query, time_zone::use_time_zone, use_api};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats: Resource<u64, Result<DashboardStats, ApiError>>,
    pub time_zone: AppTimeZone,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_api();
        let query = use_query();
        let query_source = query.clone();
        let stats = create_resource(
            move || query_source.generation(),
            move |_| {
                let api = api.clone();
                let cache = query.client().clone();
                async move { repository::fetch_stats(&api, &cache).await }
            },
        );
        Self {
            stats,
            time_zone: use_time_zone(),
        }
    }
}

/// Label, value and tone for each dashboard card.
pub fn stat_cards(stats: &DashboardStats) -> [(&'static str, u32, StatTone); 4] {
    let today = &stats.today_stats;
    [
        ("TOTAL EMPLOYEES", stats.total_employees, StatTone::Neutral),
        ("PRESENT TODAY", today.present, StatTone::Positive),
        ("ABSENT TODAY", today.absent, StatTone::Negative),
        ("UNMARKED TODAY", today.unmarked, StatTone::Pending),
    ]
}
