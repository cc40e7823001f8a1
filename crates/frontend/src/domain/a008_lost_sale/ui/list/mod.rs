use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_customer::aggregate::Customer;
use contracts::domain::a008_lost_sale::aggregate::{LostSale, LostSaleReason};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api::fetch_active_products;
use crate::domain::a004_customer::api::fetch_customers;
use crate::domain::a008_lost_sale::api;
use crate::domain::a008_lost_sale::ui::details::LostSaleDetails;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::Searchable;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

impl Searchable for LostSale {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.product_name,
            self.reason.label(),
            self.notes.as_deref().unwrap_or("")
        )
    }
}

fn columns() -> Vec<Column<LostSale>> {
    vec![
        Column::text("created_at", "When", |l: &LostSale| format_datetime(&l.created_at))
            .sort_by_key(|l| l.created_at.clone()),
        Column::new("product_name", "Product", |l: &LostSale| {
            let name = l.product_name.clone();
            let unlisted = l.product_id.is_none().then(|| view! { <Badge>"not stocked"</Badge> });
            view! { <span>{name} " " {unlisted}</span> }.into_any()
        })
        .sort_by_key(|l| l.product_name.to_lowercase()),
        Column::text("quantity", "Qty", |l: &LostSale| l.quantity.to_string())
            .sort_by_key(|l| l.quantity)
            .numeric(),
        Column::new("reason", "Reason", |l: &LostSale| {
            let variant = match l.reason {
                LostSaleReason::OutOfStock => "warning",
                LostSaleReason::Price => "error",
                LostSaleReason::Other => "neutral",
            };
            let label = l.reason.label();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        })
        .sort_by_key(|l| l.reason.as_str()),
        Column::text("notes", "Notes", |l: &LostSale| l.notes.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn LostSalesListPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let items: RwSignal<Vec<LostSale>> = RwSignal::new(Vec::new());
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let customers: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_lost_sales().await {
                Ok(mut data) => {
                    data.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    items.set(data);
                }
                Err(e) => set_error.set(Some(format!("Could not load lost sales: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    spawn_local(async move {
        match fetch_active_products().await {
            Ok(list) => products.set(list),
            Err(e) => log::warn!("Could not load products: {}", e),
        }
        match fetch_customers().await {
            Ok(list) => customers.set(list),
            Err(e) => log::warn!("Could not load customers: {}", e),
        }
    });

    let on_saved = Callback::new(move |lost: LostSale| {
        notifications.success(format!("Recorded: {} x{}", lost.product_name, lost.quantity));
        items.update(|list| list.insert(0, lost));
        show_create.set(false);
    });

    view! {
        <PageFrame page_id="a008_lost_sale--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Lost sales"
                subtitle="Customers who left without buying"
                count=Signal::derive(move || items.with(Vec::len))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " Record"
                </Button>
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
                <DataTable
                    columns=columns()
                    rows=items
                    loading=loading
                    search_placeholder="Product, reason or notes..."
                    empty_text="Nothing recorded"
                />
            </div>

            <Show when=move || show_create.get()>
                <LostSaleDetails
                    products=products
                    customers=customers
                    location_id=auth.state.with_untracked(|s| s.location_id())
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
        </PageFrame>
    }
}
