use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;

use super::view_model::SupplierDetailsViewModel;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::form::bind_text;

#[component]
pub fn SupplierDetails(
    supplier: Option<Supplier>,
    on_saved: Callback<Supplier>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(supplier.as_ref());
    let title = supplier
        .as_ref()
        .map(|s| format!("Edit supplier: {}", s.name))
        .unwrap_or_else(|| "New supplier".to_string());
    let form = vm.form;

    let (name, set_name) = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let (contact, set_contact) = bind_text(
        form,
        |f| f.contact_name.clone().unwrap_or_default(),
        |f, v| f.contact_name = Some(v),
    );
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
    let (address, set_address) = bind_text(
        form,
        |f| f.address.clone().unwrap_or_default(),
        |f, v| f.address = Some(v),
    );
    let (notes, set_notes) = bind_text(
        form,
        |f| f.notes.clone().unwrap_or_default(),
        |f, v| f.notes = Some(v),
    );

    view! {
        <ModalForm
            title=title
            on_submit=Callback::new(move |_| vm.save_command(on_saved))
            on_close=on_close
            busy=vm.saving
            error=vm.error
        >
            <Input label="Company name" value=name on_input=set_name required=true />
            <Input label="Contact person" value=contact on_input=set_contact />
            <div class="form__row">
                <Input label="Phone" value=phone on_input=set_phone input_type="tel" />
                <Input label="Email" value=email on_input=set_email input_type="email" />
            </div>
            <Input label="Address" value=address on_input=set_address />
            <Textarea label="Notes" value=notes on_input=set_notes rows=3 />
        </ModalForm>
    }
}
