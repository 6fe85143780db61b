use crate::components::{
    common::{Button, ButtonVariant},
    forms::TextInput,
    layout::ErrorMessage,
};
use crate::pages::employees::{utils::EmployeeField, view_model::EmployeeFormViewModel};
use crate::utils::browser::use_app_navigate;
use leptos::{ev, *};

#[component]
fn EmployeeFieldInput(vm: EmployeeFormViewModel, field: EmployeeField) -> impl IntoView {
    let value = create_rw_signal(vm.form.with_untracked(|f| f.value(field).to_string()));
    // Mirrors prefill from the loaded employee into the input.
    create_effect(move |_| {
        let current = vm.form.with(|f| f.value(field).to_string());
        if value.get_untracked() != current {
            value.set(current);
        }
    });
    let pending = vm.submit_action.pending();
    view! {
        <TextInput
            id=field.key()
            label=field.label()
            value=value
            input_type=field.input_type()
            placeholder=field.placeholder()
            error=vm.field_error(field)
            disabled=Signal::derive(move || pending.get())
            on_input=Callback::new(move |raw: String| vm.update_field(field, raw))
        />
    }
}

#[component]
pub fn EmployeeForm(vm: EmployeeFormViewModel) -> impl IntoView {
    let pending = vm.submit_action.pending();
    let navigate = use_app_navigate();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let submit_label = move || {
        if pending.get() {
            "[ SAVING... ]"
        } else {
            vm.mode.with_value(|m| m.submit_label())
        }
    };

    view! {
        <form class="container-unibody border border-border p-4 space-y-4 max-w-2xl" on:submit=on_submit>
            {move || vm.errors.with(|e| e.general.clone()).map(|msg| view! {
                <ErrorMessage message=msg.to_uppercase()/>
            })}
            {EmployeeField::ALL
                .into_iter()
                .map(|field| view! { <EmployeeFieldInput vm=vm field=field/> })
                .collect_view()}
            <div class="flex gap-2 pt-2">
                <Button variant=ButtonVariant::Primary loading=Signal::derive(move || pending.get())>
                    {submit_label}
                </Button>
                <Button
                    disabled=Signal::derive(move || pending.get())
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        navigate.call(vm.mode.with_value(|m| m.cancel_path()));
                    }
                >
                    "[ CANCEL ]"
                </Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::employees::utils::EmployeeFormMode;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn create_form_renders_every_field() {
        let html = render_to_string(|| {
            let vm = EmployeeFormViewModel::new(EmployeeFormMode::Create);
            view! { <EmployeeForm vm=vm/> }
        });
        for field in EmployeeField::ALL {
            assert!(html.contains(field.label()));
            assert!(html.contains(field.placeholder()));
        }
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("[ CREATE EMPLOYEE ]"));
        assert!(html.contains("[ CANCEL ]"));
    }

    #[test]
    fn rejected_submit_shows_field_and_general_errors() {
        let html = render_to_string(|| {
            let vm = EmployeeFormViewModel::new(EmployeeFormMode::Edit("e1".into()));
            vm.submit();
            vm.errors.update(|e| e.general = Some("Failed to update employee".into()));
            view! { <EmployeeForm vm=vm/> }
        });
        assert!(html.contains("[ ERROR: FAILED TO UPDATE EMPLOYEE ]"));
        assert!(html.contains("[ ERROR: Employee ID cannot be empty ]"));
        assert!(html.contains("[ UPDATE EMPLOYEE ]"));
    }
}
