use contracts::domain::a004_customer::aggregate::Customer;
use contracts::domain::a009_order::aggregate::Order;
use leptos::prelude::*;

use super::view_model::RepairOrderViewModel;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::form::bind_text;
use crate::system::auth::context::use_auth;

/// Intake form for a device brought in for repair.
#[component]
pub fn RepairOrderDetails(
    #[prop(into)] customers: Signal<Vec<Customer>>,
    on_saved: Callback<Order>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let vm = RepairOrderViewModel::new();
    let form = vm.form;

    let (customer, set_customer) = bind_text(form, |f| f.customer_id.clone(), |f, v| f.customer_id = v);
    let (device, set_device) = bind_text(form, |f| f.device.clone(), |f, v| f.device = v);
    let (problem, set_problem) = bind_text(form, |f| f.problem.clone(), |f, v| f.problem = v);
    let (estimate, set_estimate) = bind_text(form, |f| f.estimate.clone(), |f, v| f.estimate = v);

    let customer_options = Signal::derive(move || {
        customers.with(|list| list.iter().map(|c| (c.id.to_string(), c.label())).collect::<Vec<_>>())
    });

    let submit = Callback::new(move |_| {
        let (location_id, shift_id) = auth
            .state
            .with_untracked(|s| (s.location_id(), s.shift.as_ref().map(|sh| sh.id)));
        vm.save_command(location_id, shift_id, on_saved);
    });

    view! {
        <ModalForm
            title="New repair order".to_string()
            on_submit=submit
            on_close=on_close
            busy=vm.saving
            error=vm.error
            submit_label="Create order"
        >
            <Select
                label="Customer"
                value=customer
                on_change=set_customer
                options=customer_options
                placeholder="Select a customer"
            />
            <Input label="Device" value=device on_input=set_device placeholder="Make and model" required=true />
            <Textarea label="Problem" value=problem on_input=set_problem rows=3 />
            <NumberInput label="Estimate (optional)" value=estimate on_input=set_estimate min="0" />
        </ModalForm>
    }
}
