use std::sync::Arc;

use contracts::domain::a004_customer::aggregate::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_customer::api;
use crate::domain::a004_customer::ui::details::CustomerDetails;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::modal_form::confirm;
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Customer {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.phone.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or("")
        )
    }
}

fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::text("name", "Name", |c: &Customer| c.name.clone())
            .sort_by_key(|c| c.name.to_lowercase()),
        Column::text("phone", "Phone", |c: &Customer| c.phone.clone().unwrap_or_else(|| "-".into())),
        Column::text("email", "Email", |c: &Customer| c.email.clone().unwrap_or_else(|| "-".into())),
        Column::text("notes", "Notes", |c: &Customer| c.notes.clone().unwrap_or_default()),
        Column::text("created_at", "Since", |c: &Customer| format_date(&c.created_at))
            .sort_by_key(|c| c.created_at.clone()),
    ]
}

#[component]
pub fn CustomersListPage() -> impl IntoView {
    let notifications = use_notifications();
    let items: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);
    let editing: RwSignal<Option<Customer>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_customers().await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(format!("Could not load customers: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let on_saved = Callback::new(move |customer: Customer| {
        notifications.success(format!("Customer \"{}\" saved", customer.name));
        items.update(|list| upsert_by(list, customer, |c| c.id));
        show_create.set(false);
        editing.set(None);
    });

    let remove = move |customer: Customer| {
        if !confirm(&format!("Delete customer \"{}\"? Their orders are kept.", customer.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_customer(customer.id).await {
                Ok(()) => {
                    items.update(|list| list.retain(|c| c.id != customer.id));
                    notifications.success(format!("Customer \"{}\" deleted", customer.name));
                }
                Err(e) => notifications.error(format!("Could not delete customer: {}", e)),
            }
        });
    };

    let actions: CellRenderer<Customer> = Arc::new(move |c: &Customer| {
        let for_edit = c.clone();
        let for_delete = c.clone();
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| editing.set(Some(for_edit.clone()))
                attr:title="Edit"
            >
                {icon("edit")}
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| remove(for_delete.clone())
                attr:title="Delete"
            >
                {icon("delete")}
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a004_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Customers" count=Signal::derive(move || items.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " New customer"
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
                    actions=actions
                    search_placeholder="Name, phone or email..."
                    empty_text="No customers yet"
                />
            </div>

            <Show when=move || show_create.get()>
                <CustomerDetails
                    customer=None
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
            {move || editing.get().map(|customer| view! {
                <CustomerDetails
                    customer=Some(customer)
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
