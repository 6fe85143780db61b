use crate::api::Employee;
use crate::pages::employees::{
    utils::{delete_label, present_days},
    view_model::EmployeeListViewModel,
};
use leptos::*;

#[component]
pub fn EmployeeTable(employees: Vec<Employee>, vm: EmployeeListViewModel) -> impl IntoView {
    let deleting = vm.delete_action.pending();
    view! {
        <div class="overflow-x-auto border border-border">
            <table class="w-full text-left">
                <thead>
                    <tr class="border-b border-border">
                        <th class="px-4 py-2">"EMPLOYEE ID"</th>
                        <th class="px-4 py-2">"FULL NAME"</th>
                        <th class="px-4 py-2">"EMAIL"</th>
                        <th class="px-4 py-2">"DEPARTMENT"</th>
                        <th class="px-4 py-2">"TOTAL PRESENT DAYS"</th>
                        <th class="px-4 py-2">"ACTIONS"</th>
                    </tr>
                </thead>
                <tbody>
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let id = employee.id.clone();
                            let view_href = format!("/employees/{}", id);
                            let edit_href = format!("/employees/{}/edit", id);
                            let row_id = id.clone();
                            let is_armed = move || {
                                vm.armed_delete.with(|armed| armed.as_deref() == Some(row_id.as_str()))
                            };
                            view! {
                                <tr class="border-b border-border">
                                    <td class="px-4 py-2">{employee.employee_id.clone()}</td>
                                    <td class="px-4 py-2">{employee.full_name.clone()}</td>
                                    <td class="px-4 py-2">{employee.email.clone()}</td>
                                    <td class="px-4 py-2">{employee.department.clone()}</td>
                                    <td class="px-4 py-2">{present_days(&employee)}</td>
                                    <td class="px-4 py-2">
                                        <div class="flex flex-wrap gap-2">
                                            <a
                                                href=view_href
                                                class="text-systemBlue hover:underline"
                                            >
                                                "[ VIEW ]"
                                            </a>
                                            <a
                                                href=edit_href
                                                class="text-fg hover:underline"
                                            >
                                                "[ EDIT ]"
                                            </a>
                                            <button
                                                class="text-systemRed hover:underline disabled:opacity-50"
                                                disabled=move || deleting.get()
                                                on:click=move |_| vm.on_delete_click(id.clone())
                                            >
                                                {move || delete_label(is_armed(), deleting.get())}
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
