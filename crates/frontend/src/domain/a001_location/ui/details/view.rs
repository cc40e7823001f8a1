use contracts::domain::a001_location::aggregate::{Location, LocationKind};
use leptos::prelude::*;

use super::view_model::LocationDetailsViewModel;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::form::{bind_flag, bind_text};

#[component]
pub fn LocationDetails(
    location: Option<Location>,
    on_saved: Callback<Location>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = LocationDetailsViewModel::new(location.as_ref());
    let title = match &location {
        Some(l) => format!("Edit location: {}", l.name),
        None => "New location".to_string(),
    };

    let (name, set_name) = bind_text(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (kind, set_kind) = bind_text(
        vm.form,
        |f| f.kind.as_str().to_string(),
        |f, v| f.kind = LocationKind::parse(&v),
    );
    let (address, set_address) = bind_text(
        vm.form,
        |f| f.address.clone().unwrap_or_default(),
        |f, v| f.address = Some(v),
    );
    let (phone, set_phone) = bind_text(
        vm.form,
        |f| f.phone.clone().unwrap_or_default(),
        |f, v| f.phone = Some(v),
    );
    let (active, set_active) = bind_flag(vm.form, |f| f.is_active, |f, v| f.is_active = v);

    let kinds = vec![
        (LocationKind::Store.as_str().to_string(), LocationKind::Store.label().to_string()),
        (
            LocationKind::Warehouse.as_str().to_string(),
            LocationKind::Warehouse.label().to_string(),
        ),
    ];

    view! {
        <ModalForm
            title=title
            on_submit=Callback::new(move |_| vm.save_command(on_saved))
            on_close=on_close
            busy=vm.saving
            error=vm.error
            submit_label=if vm.is_edit_mode() { "Save" } else { "Create" }
        >
            <Input label="Name" value=name on_input=set_name required=true />
            <Select label="Type" value=kind on_change=set_kind options=kinds />
            <Input label="Address" value=address on_input=set_address />
            <Input label="Phone" value=phone on_input=set_phone input_type="tel" />
            <Checkbox label="Active" checked=active on_change=set_active />
        </ModalForm>
    }
}
