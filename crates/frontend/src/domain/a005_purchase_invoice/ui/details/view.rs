use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::a005_purchase_invoice::aggregate::PurchaseInvoice;
use leptos::prelude::*;

use super::view_model::{LineForm, PurchaseDetailsViewModel};
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::table::format_price;
use crate::shared::components::ui::{Button, Input, NumberInput, Select, Textarea};
use crate::shared::form::{bind_text, parse_id};

/// New purchase invoice with a dynamic list of lines.
#[component]
pub fn PurchaseInvoiceDetails(
    #[prop(into)] suppliers: Signal<Vec<Supplier>>,
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] locations: Signal<Vec<Location>>,
    default_location: Option<i64>,
    on_saved: Callback<PurchaseInvoice>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = PurchaseDetailsViewModel::new(default_location);
    let form = vm.form;

    let (supplier, set_supplier) = bind_text(form, |f| f.supplier_id.clone(), |f, v| f.supplier_id = v);
    let (location, set_location) = bind_text(form, |f| f.location_id.clone(), |f, v| f.location_id = v);
    let (number, set_number) =
        bind_text(form, |f| f.invoice_number.clone(), |f, v| f.invoice_number = v);
    let (date, set_date) = bind_text(form, |f| f.invoice_date.clone(), |f, v| f.invoice_date = v);
    let (notes, set_notes) = bind_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    let supplier_options = Signal::derive(move || {
        suppliers.with(|list| list.iter().map(|s| (s.id.to_string(), s.name.clone())).collect::<Vec<_>>())
    });
    let location_options = Signal::derive(move || {
        locations.with(|list| {
            list.iter()
                .filter(|l| l.is_active)
                .map(|l| (l.id.to_string(), l.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let product_options = Signal::derive(move || {
        products.with(|list| {
            list.iter()
                .map(|p| (p.id.to_string(), format!("{} - {}", p.sku, p.name)))
                .collect::<Vec<_>>()
        })
    });
    let total = Signal::derive(move || form.with(|f| f.live_total()));

    let line_row = move |line: LineForm| {
        let key = line.key;
        let value_of = move |get: fn(&LineForm) -> String| {
            Signal::derive(move || {
                form.with(|f| f.lines.iter().find(|l| l.key == key).map(get).unwrap_or_default())
            })
        };
        let on_product = Callback::new(move |value: String| {
            // Prefill the cost from the catalogue when it is still empty
            let cost = parse_id(&value).and_then(|id| {
                products.with_untracked(|list| list.iter().find(|p| p.id == id).map(|p| p.cost))
            });
            form.update(|f| {
                f.update_line(key, |l| {
                    l.product_id = value;
                    if l.unit_cost.trim().is_empty() {
                        if let Some(cost) = cost {
                            l.unit_cost = format!("{:.2}", cost);
                        }
                    }
                })
            });
        });

        view! {
            <div class="invoice-line">
                <Select
                    value=value_of(|l| l.product_id.clone())
                    on_change=on_product
                    options=product_options
                    placeholder="Product"
                />
                <NumberInput
                    value=value_of(|l| l.quantity.clone())
                    on_input=Callback::new(move |v| form.update(|f| f.update_line(key, |l| l.quantity = v)))
                    step="1"
                    min="1"
                    placeholder="Qty"
                />
                <NumberInput
                    value=value_of(|l| l.unit_cost.clone())
                    on_input=Callback::new(move |v| form.update(|f| f.update_line(key, |l| l.unit_cost = v)))
                    min="0"
                    placeholder="Unit cost"
                />
                <Button
                    variant="ghost"
                    icon_name="delete"
                    title="Remove line"
                    on_click=Callback::new(move |_| form.update(|f| f.remove_line(key)))
                />
            </div>
        }
    };

    view! {
        <ModalForm
            title="New purchase invoice".to_string()
            on_submit=Callback::new(move |_| vm.save_command(on_saved))
            on_close=on_close
            busy=vm.saving
            error=vm.error
            submit_label="Create"
            class="modal--wide"
        >
            <div class="form__row">
                <Select
                    label="Supplier"
                    value=supplier
                    on_change=set_supplier
                    options=supplier_options
                    placeholder="Select a supplier"
                />
                <Select
                    label="Location"
                    value=location
                    on_change=set_location
                    options=location_options
                    placeholder="Select a location"
                />
            </div>
            <div class="form__row">
                <Input label="Invoice number" value=number on_input=set_number required=true />
                <Input label="Invoice date" value=date on_input=set_date input_type="date" />
            </div>

            <div class="invoice-lines">
                <div class="invoice-lines__header">
                    <span>"Product"</span>
                    <span>"Qty"</span>
                    <span>"Unit cost"</span>
                    <span></span>
                </div>
                <For
                    each=move || form.with(|f| f.lines.clone())
                    key=|line| line.key
                    children=line_row
                />
                <div class="invoice-lines__footer">
                    <Button
                        icon_name="plus"
                        on_click=Callback::new(move |_| form.update(|f| f.add_line()))
                    >
                        " Add line"
                    </Button>
                    <span class="invoice-lines__total">
                        "Total: " <strong>{move || format_price(total.get())}</strong>
                    </span>
                </div>
            </div>

            <Textarea label="Notes" value=notes on_input=set_notes rows=2 />
        </ModalForm>
    }
}
