use contracts::domain::a006_cash_account::aggregate::CashAccount;
use contracts::domain::a007_cash_transaction::aggregate::{CashTransaction, TransactionKind};
use leptos::prelude::*;

use super::view_model::TransactionViewModel;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Input, NumberInput, Select};
use crate::shared::form::bind_text;

#[component]
pub fn CashTransactionDetails(
    account: CashAccount,
    /// Other accounts a transfer can go to
    #[prop(into)]
    accounts: Signal<Vec<CashAccount>>,
    on_saved: Callback<CashTransaction>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = TransactionViewModel::new(account.id);
    let form = vm.form;
    let account_id = account.id;
    let currency = account.currency.clone();

    let (kind, set_kind) = bind_text(
        form,
        |f| f.kind.as_str().to_string(),
        |f, v| f.kind = TransactionKind::parse(&v),
    );
    let (amount, set_amount) = bind_text(form, |f| f.amount.clone(), |f, v| f.amount = v);
    let (description, set_description) =
        bind_text(form, |f| f.description.clone(), |f, v| f.description = v);
    let (counter, set_counter) = bind_text(
        form,
        |f| f.counter_account_id.clone(),
        |f, v| f.counter_account_id = v,
    );
    let (pin, set_pin) = bind_text(form, |f| f.pin.clone(), |f, v| f.pin = v);

    let kinds: Vec<(String, String)> = TransactionKind::ALL
        .iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect();
    let counter_options = Signal::derive(move || {
        accounts.with(|list| {
            list.iter()
                .filter(|a| a.id != account_id && a.is_active && a.currency == currency)
                .map(|a| (a.id.to_string(), a.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let is_transfer = move || form.with(|f| f.kind == TransactionKind::Transfer);

    view! {
        <ModalForm
            title=format!("New transaction: {}", account.name)
            on_submit=Callback::new(move |_| vm.save_command(on_saved))
            on_close=on_close
            busy=vm.saving
            error=vm.error
            submit_label="Post"
        >
            <div class="form__row">
                <Select label="Type" value=kind on_change=set_kind options=kinds />
                <NumberInput label=format!("Amount ({})", account.currency) value=amount on_input=set_amount min="0.01" />
            </div>
            <Show when=is_transfer>
                <Select
                    label="Transfer to"
                    value=counter
                    on_change=set_counter
                    options=counter_options
                    placeholder="Select an account"
                />
            </Show>
            <Input label="Description" value=description on_input=set_description required=true />
            <Input
                label="PIN"
                value=pin
                on_input=set_pin
                input_type="password"
                autocomplete="off"
                placeholder="4 to 6 digits"
            />
        </ModalForm>
    }
}
