use std::sync::Arc;

use contracts::domain::a002_product::aggregate::Product;
use contracts::system::roles::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::modal_form::confirm;
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_number_int, format_price};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

impl Searchable for Product {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.sku,
            self.name,
            self.category.as_deref().unwrap_or("")
        )
    }
}

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::text("sku", "SKU", |p: &Product| p.sku.clone()).sort_by_key(|p| p.sku.clone()),
        Column::new("name", "Name", |p: &Product| {
            let name = p.name.clone();
            let inactive = (!p.is_active).then(|| view! { <Badge>"inactive"</Badge> });
            view! { <span>{name} " " {inactive}</span> }.into_any()
        })
        .sort_by_key(|p| p.name.to_lowercase()),
        Column::text("category", "Category", |p: &Product| {
            p.category.clone().unwrap_or_else(|| "-".into())
        })
        .sort_by(|a, b| cmp_text(a.category.as_deref(), b.category.as_deref())),
        Column::text("price", "Price", |p: &Product| format_price(p.price))
            .sort_by(|a, b| cmp_f64(a.price, b.price))
            .numeric(),
        Column::text("cost", "Cost", |p: &Product| format_price(p.cost))
            .sort_by(|a, b| cmp_f64(a.cost, b.cost))
            .numeric(),
        Column::new("stock_qty", "Stock", |p: &Product| {
            let qty = format_number_int(p.stock_qty as f64);
            if p.is_low_stock() {
                let hint = format!("Reorder level {}", p.reorder_level);
                view! {
                    <span>
                        {qty} " " <Badge variant="warning" attr:title=hint>
                            "low"
                        </Badge>
                    </span>
                }
                .into_any()
            } else {
                qty.into_any()
            }
        })
        .sort_by_key(|p| p.stock_qty)
        .numeric(),
    ]
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let can_edit = Signal::derive(move || auth.state.with(|s| s.has_role(UserRole::Manager)));

    let items: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);
    let show_inactive = RwSignal::new(false);
    let editing: RwSignal<Option<Product>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(format!("Could not load products: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let visible = Signal::derive(move || {
        let all = items.get();
        if show_inactive.get() {
            all
        } else {
            all.into_iter().filter(|p| p.is_active).collect()
        }
    });
    let low_stock = Signal::derive(move || {
        items.with(|list| list.iter().filter(|p| p.is_active && p.is_low_stock()).count())
    });

    let on_saved = Callback::new(move |product: Product| {
        notifications.success(format!("Product \"{}\" saved", product.name));
        items.update(|list| upsert_by(list, product, |p| p.id));
        show_create.set(false);
        editing.set(None);
    });

    let toggle_active = move |product: Product| {
        let activate = !product.is_active;
        if !activate && !confirm(&format!("Deactivate \"{}\"? It will disappear from the sales screen.", product.name)) {
            return;
        }
        spawn_local(async move {
            match api::set_product_active(product.id, activate).await {
                Ok(updated) => {
                    let verb = if activate { "activated" } else { "deactivated" };
                    notifications.success(format!("\"{}\" {}", updated.name, verb));
                    items.update(|list| upsert_by(list, updated, |p| p.id));
                }
                Err(e) => notifications.error(format!("Could not update \"{}\": {}", product.name, e)),
            }
        });
    };

    let actions: CellRenderer<Product> = Arc::new(move |p: &Product| {
        let for_edit = p.clone();
        let for_toggle = p.clone();
        let toggle_icon = if p.is_active { "delete" } else { "check" };
        let toggle_title = if p.is_active { "Deactivate" } else { "Activate" };
        view! {
            <Show when=move || can_edit.get()>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click={
                        let product = for_edit.clone();
                        move |_| editing.set(Some(product.clone()))
                    }
                    attr:title="Edit"
                >
                    {icon("edit")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click={
                        let product = for_toggle.clone();
                        move |_| toggle_active(product.clone())
                    }
                    attr:title=toggle_title
                >
                    {icon(toggle_icon)}
                </Button>
            </Show>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Products"
                count=Signal::derive(move || visible.with(Vec::len))
            >
                <Show when=move || can_edit.get()>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                        {icon("plus")}
                        " New product"
                    </Button>
                </Show>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="page__filters">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || show_inactive.get()
                            on:change=move |ev| show_inactive.set(event_target_checked(&ev))
                        />
                        " Show inactive"
                    </label>
                    {move || {
                        let count = low_stock.get();
                        (count > 0).then(|| view! {
                            <Badge variant="warning">{format!("{} low on stock", count)}</Badge>
                        })
                    }}
                </div>
                <DataTable
                    columns=columns()
                    rows=visible
                    loading=loading
                    actions=actions
                    search_placeholder="SKU, name or category..."
                    empty_text="No products"
                />
            </div>

            <Show when=move || show_create.get()>
                <ProductDetails
                    product=None
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
            {move || editing.get().map(|product| view! {
                <ProductDetails
                    product=Some(product)
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
