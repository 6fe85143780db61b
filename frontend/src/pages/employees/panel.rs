use crate::{
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::browser::{use_app_navigate, use_route_param},
};
use leptos::*;

use super::{
    components::{AttendanceHistory, EmployeeForm, EmployeeInfo, EmployeeTable},
    utils::EmployeeFormMode,
    view_model::{EmployeeDetailViewModel, EmployeeFormViewModel, EmployeeListViewModel},
};

fn route_id() -> Signal<String> {
    let id = use_route_param("id");
    Signal::derive(move || id.get().unwrap_or_default())
}

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let vm = EmployeeListViewModel::new();
    let navigate = use_app_navigate();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-hierarchy-1">"EMPLOYEES"</h1>
                <Button
                    variant=ButtonVariant::Primary
                    on:click=move |_| navigate.call("/employees/new".to_string())
                >
                    "[ + ADD EMPLOYEE ]"
                </Button>
            </div>
            <Show when=move || vm.delete_failed.get()>
                <ErrorMessage message="FAILED TO DELETE EMPLOYEE"/>
            </Show>
            {move || match vm.employees.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(_)) => view! { <ErrorMessage message="FAILED TO LOAD EMPLOYEES"/> }.into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <EmptyState
                        title="NO EMPLOYEES FOUND"
                        description="Add your first employee to start tracking attendance."
                    />
                }
                .into_view(),
                Some(Ok(list)) => view! { <EmployeeTable employees=list vm=vm/> }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let id = route_id();
    let vm = EmployeeDetailViewModel::new(id);
    let navigate = use_app_navigate();
    let deleting = vm.delete_action.pending();

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h1 class="text-hierarchy-1">"EMPLOYEE DETAILS"</h1>
                <div class="flex gap-2">
                    <Button on:click=move |_| navigate.call("/employees".to_string())>"[ BACK ]"</Button>
                    <Button on:click=move |_| navigate.call(format!("/employees/{}/edit", id.get_untracked()))>
                        "[ EDIT ]"
                    </Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        loading=Signal::derive(move || deleting.get())
                        on:click=move |_| vm.confirm_open.set(true)
                    >
                        "[ DELETE ]"
                    </Button>
                </div>
            </div>
            {move || vm.delete_action.value().get().and_then(Result::err).map(|_| view! {
                <ErrorMessage message="FAILED TO DELETE EMPLOYEE"/>
            })}
            {move || match vm.employee.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) if err.is_not_found() => {
                    view! { <ErrorMessage message="EMPLOYEE NOT FOUND"/> }.into_view()
                }
                Some(Err(_)) => view! { <ErrorMessage message="FAILED TO LOAD EMPLOYEE"/> }.into_view(),
                Some(Ok(employee)) => view! {
                    <EmployeeInfo employee=employee time_zone=vm.time_zone/>
                    <h2 class="text-hierarchy-2 mb-4">"ATTENDANCE HISTORY"</h2>
                    {move || match vm.history.get() {
                        None => view! { <LoadingSpinner/> }.into_view(),
                        Some(Err(_)) => view! { <ErrorMessage message="FAILED TO LOAD ATTENDANCE"/> }.into_view(),
                        Some(Ok(records)) => view! {
                            <AttendanceHistory records=records time_zone=vm.time_zone/>
                        }
                        .into_view(),
                    }}
                }
                .into_view(),
            }}
            <ConfirmDialog
                is_open=vm.confirm_open.into()
                title="DELETE EMPLOYEE"
                message="This removes the employee and all of their attendance records."
                confirm_label="[ DELETE ]"
                pending=Signal::derive(move || deleting.get())
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.confirm_open.set(false))
            />
        </div>
    }
}

#[component]
pub fn EmployeeFormPage() -> impl IntoView {
    let mode = EmployeeFormMode::from_route_id(use_route_param("id").get_untracked());
    let vm = EmployeeFormViewModel::new(mode);
    let title = vm.mode.with_value(|m| m.title());

    view! {
        <div class="space-y-6">
            <h1 class="text-hierarchy-1">{title}</h1>
            {move || {
                if !vm.is_edit() {
                    return view! { <EmployeeForm vm=vm/> }.into_view();
                }
                match vm.existing.get() {
                    None | Some(None) => view! { <LoadingSpinner/> }.into_view(),
                    Some(Some(Err(err))) if err.is_not_found() => {
                        view! { <ErrorMessage message="EMPLOYEE NOT FOUND"/> }.into_view()
                    }
                    Some(Some(Err(_))) => {
                        view! { <ErrorMessage message="FAILED TO LOAD EMPLOYEE"/> }.into_view()
                    }
                    Some(Some(Ok(_))) => view! { <EmployeeForm vm=vm/> }.into_view(),
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn list_page_renders_header_while_loading() {
        let html = render_to_string(|| view! { <EmployeeListPage/> });
        assert!(html.contains("EMPLOYEES"));
        assert!(html.contains("[ + ADD EMPLOYEE ]"));
        assert!(html.contains("LOADING"));
    }

    #[test]
    fn form_page_without_id_is_the_create_form() {
        let html = render_to_string(|| view! { <EmployeeFormPage/> });
        assert!(html.contains("ADD EMPLOYEE"));
        assert!(html.contains("[ CREATE EMPLOYEE ]"));
    }

    #[test]
    fn detail_page_offers_navigation_and_delete() {
        let html = render_to_string(|| view! { <EmployeeDetailPage/> });
        assert!(html.contains("EMPLOYEE DETAILS"));
        assert!(html.contains("[ BACK ]"));
        assert!(html.contains("[ EDIT ]"));
        assert!(html.contains("[ DELETE ]"));
    }
}
