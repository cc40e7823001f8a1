use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::a006_cash_account::aggregate::{CashAccount, CashAccountDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_cash_account::api;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::form::{bind_text, id_to_value, parse_id};

/// Create form for a till, safe or bank account. Accounts are not edited
/// after creation; the balance only moves through transactions.
#[component]
pub fn CashAccountDetails(
    #[prop(into)] locations: Signal<Vec<Location>>,
    on_saved: Callback<CashAccount>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(CashAccountDto::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let (name, set_name) = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let (currency, set_currency) = bind_text(form, |f| f.currency.clone(), |f, v| f.currency = v);
    let (location, set_location) = bind_text(
        form,
        |f| id_to_value(f.location_id),
        |f, v| f.location_id = parse_id(&v),
    );
    let location_options = Signal::derive(move || {
        locations.with(|list| list.iter().map(|l| (l.id.to_string(), l.name.clone())).collect::<Vec<_>>())
    });

    let save = move || {
        let mut dto = form.get_untracked();
        dto.name = dto.name.trim().to_string();
        dto.currency = dto.currency.trim().to_uppercase();
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::create_account(&dto).await;
            saving.set(false);
            match result {
                Ok(account) => on_saved.run(account),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <ModalForm
            title="New cash account".to_string()
            on_submit=Callback::new(move |_| save())
            on_close=on_close
            busy=saving
            error=error
            submit_label="Create"
        >
            <Input label="Name" value=name on_input=set_name required=true placeholder="Main till" />
            <div class="form__row">
                <Select
                    label="Location"
                    value=location
                    on_change=set_location
                    options=location_options
                    placeholder="No location (bank)"
                />
                <Input label="Currency" value=currency on_input=set_currency placeholder="USD" />
            </div>
        </ModalForm>
    }
}
