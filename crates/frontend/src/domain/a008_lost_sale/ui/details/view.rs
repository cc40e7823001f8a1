use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_customer::aggregate::Customer;
use contracts::domain::a008_lost_sale::aggregate::{LostSale, LostSaleReason};
use leptos::prelude::*;

use super::view_model::LostSaleViewModel;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::form::bind_text;

#[component]
pub fn LostSaleDetails(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] customers: Signal<Vec<Customer>>,
    location_id: Option<i64>,
    on_saved: Callback<LostSale>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = LostSaleViewModel::new();
    let form = vm.form;

    let (product, set_product) = bind_text(form, |f| f.product_id.clone(), |f, v| f.product_id = v);
    let (name, set_name) = bind_text(form, |f| f.product_name.clone(), |f, v| f.product_name = v);
    let (quantity, set_quantity) = bind_text(form, |f| f.quantity.clone(), |f, v| f.quantity = v);
    let (reason, set_reason) = bind_text(
        form,
        |f| f.reason.as_str().to_string(),
        |f, v| f.reason = LostSaleReason::parse(&v),
    );
    let (customer, set_customer) =
        bind_text(form, |f| f.customer_id.clone(), |f, v| f.customer_id = v);
    let (notes, set_notes) = bind_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    let product_options = Signal::derive(move || {
        products.with(|list| {
            list.iter()
                .map(|p| (p.id.to_string(), format!("{} ({} in stock)", p.name, p.stock_qty)))
                .collect::<Vec<_>>()
        })
    });
    let customer_options = Signal::derive(move || {
        customers.with(|list| list.iter().map(|c| (c.id.to_string(), c.label())).collect::<Vec<_>>())
    });
    let reasons: Vec<(String, String)> = LostSaleReason::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect();
    let free_text = move || form.with(|f| f.product_id.is_empty());

    let submit = Callback::new(move |_| {
        products.with_untracked(|list| vm.save_command(location_id, list, on_saved));
    });

    view! {
        <ModalForm
            title="Record lost sale".to_string()
            on_submit=submit
            on_close=on_close
            busy=vm.saving
            error=vm.error
            submit_label="Record"
        >
            <Select
                label="Product"
                value=product
                on_change=set_product
                options=product_options
                placeholder="Not in the catalogue"
            />
            <Show when=free_text>
                <Input
                    label="What did the customer ask for?"
                    value=name
                    on_input=set_name
                    placeholder="e.g. Lightning to HDMI adapter"
                />
            </Show>
            <div class="form__row">
                <NumberInput label="Quantity" value=quantity on_input=set_quantity step="1" min="1" />
                <Select label="Reason" value=reason on_change=set_reason options=reasons />
            </div>
            <Select
                label="Customer"
                value=customer
                on_change=set_customer
                options=customer_options
                placeholder="Walk-in"
            />
            <Textarea label="Notes" value=notes on_input=set_notes rows=2 />
        </ModalForm>
    }
}
