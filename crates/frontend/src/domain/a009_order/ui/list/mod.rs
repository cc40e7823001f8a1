use std::sync::Arc;

use contracts::domain::a004_customer::aggregate::Customer;
use contracts::domain::a009_order::aggregate::{Order, OrderKind, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_customer::api::fetch_customers;
use crate::domain::a009_order::api;
use crate::domain::a009_order::ui::details::RepairOrderDetails;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::modal_form::confirm;
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_price;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Order {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.display_number(),
            self.customer_name.as_deref().unwrap_or(""),
            self.device_description.as_deref().unwrap_or(""),
            self.status.label()
        )
    }
}

pub fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Open => "primary",
        OrderStatus::InProgress => "warning",
        OrderStatus::Ready => "success",
        OrderStatus::Completed => "neutral",
        OrderStatus::Cancelled => "error",
    }
}

fn columns() -> Vec<Column<Order>> {
    vec![
        Column::text("number", "Order", |o: &Order| o.display_number()).sort_by_key(|o| o.id),
        Column::text("created_at", "Created", |o: &Order| format_datetime(&o.created_at))
            .sort_by_key(|o| o.created_at.clone()),
        Column::text("kind", "Type", |o: &Order| o.kind.label().to_string()),
        Column::text("customer", "Customer", |o: &Order| {
            o.customer_name.clone().unwrap_or_else(|| "Walk-in".into())
        }),
        Column::text("device", "Device / items", |o: &Order| match o.kind {
            OrderKind::Repair => o.device_description.clone().unwrap_or_default(),
            OrderKind::Sale => format!("{} item(s)", o.lines.iter().map(|l| l.quantity).sum::<i64>()),
        }),
        Column::new("status", "Status", |o: &Order| {
            let status = o.status;
            view! { <Badge variant=status_variant(status)>{status.label()}</Badge> }.into_any()
        })
        .sort_by_key(|o| o.status.as_str()),
        Column::text("total", "Total", |o: &Order| format_price(o.total))
            .sort_by(|a, b| cmp_f64(a.total, b.total))
            .numeric(),
    ]
}

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let notifications = use_notifications();
    let items: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let customers: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let status_filter = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);

    let load_data = move || {
        let status = OrderStatus::parse(&status_filter.get_untracked());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_orders(status).await {
                Ok(mut data) => {
                    data.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    items.set(data);
                }
                Err(e) => set_error.set(Some(format!("Could not load orders: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    spawn_local(async move {
        match fetch_customers().await {
            Ok(list) => customers.set(list),
            Err(e) => log::warn!("Could not load customers: {}", e),
        }
    });

    let status_options: Vec<(String, String)> = OrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    let on_filter = Callback::new(move |value: String| {
        status_filter.set(value);
        load_data();
    });

    let on_saved = Callback::new(move |order: Order| {
        notifications.success(format!("Repair order {} created", order.display_number()));
        items.update(|list| upsert_by(list, order, |o| o.id));
        show_create.set(false);
    });

    let change_status = move |order: Order, next: OrderStatus| {
        if !order.status.can_transition_to(next) {
            return;
        }
        if next == OrderStatus::Cancelled
            && !confirm(&format!("Cancel order {}?", order.display_number()))
        {
            return;
        }
        spawn_local(async move {
            match api::update_order_status(order.id, next).await {
                Ok(updated) => {
                    notifications.success(format!(
                        "Order {} is now {}",
                        updated.display_number(),
                        updated.status.label().to_lowercase()
                    ));
                    let filter = OrderStatus::parse(&status_filter.get_untracked());
                    items.update(|list| {
                        if filter.is_some_and(|f| f != updated.status) {
                            list.retain(|o| o.id != updated.id);
                        } else {
                            upsert_by(list, updated, |o| o.id);
                        }
                    });
                }
                Err(e) => notifications.error(format!("Could not change status: {}", e)),
            }
        });
    };

    let actions: CellRenderer<Order> = Arc::new(move |o: &Order| {
        o.status
            .next_statuses()
            .iter()
            .map(|&next| {
                let order = o.clone();
                let appearance = if next == OrderStatus::Cancelled {
                    ButtonAppearance::Subtle
                } else {
                    ButtonAppearance::Secondary
                };
                view! {
                    <Button
                        appearance=appearance
                        size=ButtonSize::Small
                        on_click=move |_| change_status(order.clone(), next)
                    >
                        {next.label()}
                    </Button>
                }
            })
            .collect_view()
            .into_any()
    });

    view! {
        <PageFrame page_id="a009_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" count=Signal::derive(move || items.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " New repair"
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
                <div class="page__filters">
                    <Select
                        label="Status"
                        value=status_filter
                        on_change=on_filter
                        options=status_options
                        placeholder="All statuses"
                    />
                </div>
                <DataTable
                    columns=columns()
                    rows=items
                    loading=loading
                    actions=actions
                    search_placeholder="Number, customer or device..."
                    empty_text="No orders"
                />
            </div>

            <Show when=move || show_create.get()>
                <RepairOrderDetails
                    customers=customers
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
        </PageFrame>
    }
}
