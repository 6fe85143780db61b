use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
use crate::components::common::{Button, ButtonVariant};
use crate::pages::attendance::{
    utils::{mark_button_class, status_label, status_text_class, statuses_by_employee},
    view_model::AttendanceViewModel,
};
use leptos::*;

#[component]
pub fn MarkingTable(
    employees: Vec<Employee>,
    records: Vec<AttendanceRecord>,
    vm: AttendanceViewModel,
) -> impl IntoView {
    let statuses = statuses_by_employee(&records);
    let can_mark = vm.can_mark();

    view! {
        <div class="overflow-x-auto border border-border">
            <table class="w-full text-left">
                <thead>
                    <tr class="border-b border-border">
                        <th class="px-4 py-2">"EMPLOYEE ID"</th>
                        <th class="px-4 py-2">"FULL NAME"</th>
                        <th class="px-4 py-2">"DEPARTMENT"</th>
                        <th class="px-4 py-2">"STATUS"</th>
                        <th class="px-4 py-2">"ACTIONS"</th>
                    </tr>
                </thead>
                <tbody>
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let current = statuses.get(&employee.id).copied();
                            let present_id = employee.id.clone();
                            let absent_id = employee.id.clone();
                            view! {
                                <tr class="border-b border-border">
                                    <td class="px-4 py-2">{employee.employee_id}</td>
                                    <td class="px-4 py-2">{employee.full_name}</td>
                                    <td class="px-4 py-2">{employee.department}</td>
                                    <td class="px-4 py-2">
                                        <span class=status_text_class(current)>{status_label(current)}</span>
                                    </td>
                                    <td class="px-4 py-2">
                                        <div class="flex gap-2">
                                            <Button
                                                variant=ButtonVariant::Primary
                                                class=mark_button_class(current, AttendanceStatus::Present).to_string()
                                                disabled=Signal::derive(move || !can_mark.get())
                                                on:click=move |_| vm.mark(present_id.clone(), AttendanceStatus::Present)
                                            >
                                                "[ PRESENT ]"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Destructive
                                                class=mark_button_class(current, AttendanceStatus::Absent).to_string()
                                                disabled=Signal::derive(move || !can_mark.get())
                                                on:click=move |_| vm.mark(absent_id.clone(), AttendanceStatus::Absent)
                                            >
                                                "[ ABSENT ]"
                                            </Button>
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
