use contracts::domain::a004_customer::aggregate::Customer;
use leptos::prelude::*;

use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::form::bind_text;

#[component]
pub fn CustomerDetails(
    customer: Option<Customer>,
    on_saved: Callback<Customer>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(customer.as_ref());
    let title = if vm.is_edit_mode() { "Edit customer" } else { "New customer" };
    let form = vm.form;

    let (name, set_name) = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = bind_text(
        form,
        |f| f.phone.clone().unwrap_or_default(),
        |f, v| f.phone = Some(v),
    );
    let (email, set_email) = bind_text(
        form,
        |f| f.email.clone().unwrap_or_default(),
        |f, v| f.email = Some(v),
    );
    let (notes, set_notes) = bind_text(
        form,
        |f| f.notes.clone().unwrap_or_default(),
        |f, v| f.notes = Some(v),
    );

    view! {
        <ModalForm
            title=title.to_string()
            on_submit=Callback::new(move |_| vm.save_command(on_saved))
            on_close=on_close
            busy=vm.saving
            error=vm.error
        >
            <Input label="Name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Phone" value=phone on_input=set_phone input_type="tel" />
                <Input label="Email" value=email on_input=set_email input_type="email" />
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes rows=3 />
        </ModalForm>
    }
}
