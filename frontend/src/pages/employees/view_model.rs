use crate::api::{ApiError, AttendanceRecord, Employee, EmployeePayload, FieldErrors};
use crate::config::AppTimeZone;
use crate::pages::employees::{
    repository,
    utils::{
        delete_click, submission_outcome, DeleteClick, EmployeeField, EmployeeFormMode,
        EmployeeFormState, SubmitOutcome,
    },
};
use crate::state::{query::use_query, time_zone::use_time_zone, use_api};
use crate::utils::browser::use_app_navigate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeeListViewModel {
    pub employees: Resource<u64, Result<Vec<Employee>, ApiError>>,
    pub armed_delete: RwSignal<Option<String>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub delete_failed: RwSignal<bool>,
}

impl EmployeeListViewModel {
    pub fn new() -> Self {
        let api = use_api();
        let query = use_query();

        let (api_list, query_list) = (api.clone(), query.clone());
        let employees = create_resource(
            move || query.generation(),
            move |_| {
                let api = api_list.clone();
                let cache = query_list.client().clone();
                async move { repository::fetch_employees(&api, &cache).await }
            },
        );

        let query_delete = use_query();
        let delete_action = create_action(move |id: &String| {
            let api = api.clone();
            let cache = query_delete.client().clone();
            let id = id.clone();
            async move { repository::delete_employee(&api, &cache, &id).await }
        });

        let armed_delete = create_rw_signal(None::<String>);
        let delete_failed = create_rw_signal(false);
        create_effect(move |_| match delete_action.value().get() {
            Some(Ok(())) => {
                armed_delete.set(None);
                delete_failed.set(false);
            }
            Some(Err(_)) => delete_failed.set(true),
            None => {}
        });

        Self {
            employees,
            armed_delete,
            delete_action,
            delete_failed,
        }
    }

    pub fn on_delete_click(&self, id: String) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        let armed = self.armed_delete.get_untracked();
        match delete_click(armed.as_deref(), &id) {
            DeleteClick::Arm => self.armed_delete.set(Some(id)),
            DeleteClick::Confirm => self.delete_action.dispatch(id),
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeDetailViewModel {
    pub id: Signal<String>,
    pub employee: Resource<(String, u64), Result<Employee, ApiError>>,
    pub history: Resource<(String, u64), Result<Vec<AttendanceRecord>, ApiError>>,
    pub confirm_open: RwSignal<bool>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub time_zone: AppTimeZone,
}

impl EmployeeDetailViewModel {
    pub fn new(id: Signal<String>) -> Self {
        let api = use_api();
        let query = use_query();

        let source = {
            let query = query.clone();
            move || (id.get(), query.generation())
        };

        let (api_emp, query_emp) = (api.clone(), query.clone());
        let employee = create_resource(source.clone(), move |(id, _)| {
            let api = api_emp.clone();
            let cache = query_emp.client().clone();
            async move { repository::fetch_employee(&api, &cache, &id).await }
        });

        let (api_hist, query_hist) = (api.clone(), query.clone());
        let history = create_resource(source, move |(id, _)| {
            let api = api_hist.clone();
            let cache = query_hist.client().clone();
            async move { repository::fetch_employee_attendance(&api, &cache, &id).await }
        });

        let delete_action = create_action(move |id: &String| {
            let api = api.clone();
            let cache = query.client().clone();
            let id = id.clone();
            async move { repository::delete_employee(&api, &cache, &id).await }
        });

        let confirm_open = create_rw_signal(false);
        let navigate = use_app_navigate();
        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                confirm_open.set(false);
                if result.is_ok() {
                    navigate.call("/employees".to_string());
                }
            }
        });

        Self {
            id,
            employee,
            history,
            confirm_open,
            delete_action,
            time_zone: use_time_zone(),
        }
    }

    pub fn confirm_delete(&self) {
        if !self.delete_action.pending().get_untracked() {
            self.delete_action.dispatch(self.id.get_untracked());
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormViewModel {
    pub mode: StoredValue<EmployeeFormMode>,
    pub form: RwSignal<EmployeeFormState>,
    pub errors: RwSignal<FieldErrors>,
    pub existing: Resource<(Option<String>, u64), Option<Result<Employee, ApiError>>>,
    pub submit_action: Action<EmployeePayload, Result<Employee, ApiError>>,
}

impl EmployeeFormViewModel {
    pub fn new(mode: EmployeeFormMode) -> Self {
        let api = use_api();
        let query = use_query();
        let mode = store_value(mode);

        let (api_load, query_load) = (api.clone(), query.clone());
        let existing = create_resource(
            move || {
                (
                    mode.with_value(|m| m.employee_id().map(str::to_string)),
                    query.generation(),
                )
            },
            move |(id, _)| {
                let api = api_load.clone();
                let cache = query_load.client().clone();
                async move {
                    match id {
                        Some(id) => Some(repository::fetch_employee(&api, &cache, &id).await),
                        None => None,
                    }
                }
            },
        );

        let form = create_rw_signal(EmployeeFormState::default());
        let prefilled = create_rw_signal(false);
        create_effect(move |_| {
            if let Some(Some(Ok(employee))) = existing.get() {
                if !prefilled.get_untracked() {
                    form.set(EmployeeFormState::from_employee(&employee));
                    prefilled.set(true);
                }
            }
        });

        let query_submit = use_query();
        let submit_action = create_action(move |payload: &EmployeePayload| {
            let api = api.clone();
            let cache = query_submit.client().clone();
            let payload = payload.clone();
            let mode = mode.get_value();
            async move {
                match mode {
                    EmployeeFormMode::Create => {
                        repository::create_employee(&api, &cache, &payload).await
                    }
                    EmployeeFormMode::Edit(id) => {
                        repository::update_employee(&api, &cache, &id, &payload).await
                    }
                }
            }
        });

        let errors = create_rw_signal(FieldErrors::default());
        let navigate = use_app_navigate();
        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match mode.with_value(|m| submission_outcome(m, &result)) {
                    SubmitOutcome::Navigate(path) => navigate.call(path),
                    SubmitOutcome::Rejected(rejected) => errors.set(rejected),
                }
            }
        });

        Self {
            mode,
            form,
            errors,
            existing,
            submit_action,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.mode.with_value(|m| m.employee_id().is_some())
    }

    pub fn update_field(&self, field: EmployeeField, value: String) {
        self.form.update(|form| form.set(field, value));
        self.errors.update(|errors| errors.clear_field(field.key()));
    }

    pub fn field_error(&self, field: EmployeeField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field.key()).map(str::to_string)))
    }

    /// Validates locally; only a clean form reaches the network.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        self.errors.set(FieldErrors::default());
        match self.form.get_untracked().validate() {
            Ok(payload) => self.submit_action.dispatch(payload),
            Err(errors) => self.errors.set(errors),
        }
    }
}
