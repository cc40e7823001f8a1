use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;

use super::view_model::ProductDetailsViewModel;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Checkbox, Input, NumberInput, Textarea};
use crate::shared::form::{bind_flag, bind_text};

#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_saved: Callback<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(product.as_ref());
    let title = match &product {
        Some(p) => format!("Edit product: {}", p.name),
        None => "New product".to_string(),
    };
    let form = vm.form;

    let (sku, set_sku) = bind_text(form, |f| f.sku.clone(), |f, v| f.sku = v);
    let (name, set_name) = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let (category, set_category) = bind_text(form, |f| f.category.clone(), |f, v| f.category = v);
    let (description, set_description) =
        bind_text(form, |f| f.description.clone(), |f, v| f.description = v);
    let (price, set_price) = bind_text(form, |f| f.price.clone(), |f, v| f.price = v);
    let (cost, set_cost) = bind_text(form, |f| f.cost.clone(), |f, v| f.cost = v);
    let (stock, set_stock) = bind_text(form, |f| f.stock_qty.clone(), |f, v| f.stock_qty = v);
    let (reorder, set_reorder) =
        bind_text(form, |f| f.reorder_level.clone(), |f, v| f.reorder_level = v);
    let (active, set_active) = bind_flag(form, |f| f.is_active, |f, v| f.is_active = v);

    view! {
        <ModalForm
            title=title
            on_submit=Callback::new(move |_| vm.save_command(on_saved))
            on_close=on_close
            busy=vm.saving
            error=vm.error
            submit_label=if vm.is_edit_mode() { "Save" } else { "Create" }
            class="modal--wide"
        >
            <div class="form__row">
                <Input label="SKU" value=sku on_input=set_sku required=true />
                <Input label="Name" value=name on_input=set_name required=true />
            </div>
            <div class="form__row">
                <Input label="Category" value=category on_input=set_category />
            </div>
            <div class="form__row">
                <NumberInput label="Price" value=price on_input=set_price min="0" />
                <NumberInput label="Cost" value=cost on_input=set_cost min="0" />
            </div>
            <div class="form__row">
                <NumberInput label="In stock" value=stock on_input=set_stock step="1" min="0" />
                <NumberInput
                    label="Reorder level"
                    value=reorder
                    on_input=set_reorder
                    step="1"
                    min="0"
                />
            </div>
            <Textarea label="Description" value=description on_input=set_description rows=3 />
            <Checkbox label="Active" checked=active on_change=set_active />
        </ModalForm>
    }
}
