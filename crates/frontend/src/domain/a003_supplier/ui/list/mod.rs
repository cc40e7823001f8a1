use std::sync::Arc;

use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_supplier::api;
use crate::domain::a003_supplier::ui::details::SupplierDetails;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::modal_form::confirm;
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Supplier {
    fn search_text(&self) -> String {
        [
            Some(self.name.as_str()),
            self.contact_name.as_deref(),
            self.phone.as_deref(),
            self.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".into())
}

fn columns() -> Vec<Column<Supplier>> {
    vec![
        Column::text("name", "Name", |s: &Supplier| s.name.clone())
            .sort_by_key(|s| s.name.to_lowercase()),
        Column::text("contact_name", "Contact", |s: &Supplier| dash(&s.contact_name))
            .sort_by(|a, b| cmp_text(a.contact_name.as_deref(), b.contact_name.as_deref())),
        Column::text("phone", "Phone", |s: &Supplier| dash(&s.phone)),
        Column::new("email", "Email", |s: &Supplier| match s.email.clone() {
            Some(email) => {
                let href = format!("mailto:{}", email);
                view! { <a href=href>{email}</a> }.into_any()
            }
            None => "-".into_any(),
        }),
    ]
}

#[component]
pub fn SuppliersListPage() -> impl IntoView {
    let notifications = use_notifications();
    let items: RwSignal<Vec<Supplier>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);
    let editing: RwSignal<Option<Supplier>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(format!("Could not load suppliers: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let on_saved = Callback::new(move |supplier: Supplier| {
        notifications.success(format!("Supplier \"{}\" saved", supplier.name));
        items.update(|list| upsert_by(list, supplier, |s| s.id));
        show_create.set(false);
        editing.set(None);
    });

    let remove = move |supplier: Supplier| {
        if !confirm(&format!("Delete supplier \"{}\"?", supplier.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_supplier(supplier.id).await {
                Ok(()) => {
                    items.update(|list| list.retain(|s| s.id != supplier.id));
                    notifications.success(format!("Supplier \"{}\" deleted", supplier.name));
                }
                Err(e) => notifications.error(format!("Could not delete supplier: {}", e)),
            }
        });
    };

    let actions: CellRenderer<Supplier> = Arc::new(move |s: &Supplier| {
        let for_edit = s.clone();
        let for_delete = s.clone();
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
        <PageFrame page_id="a003_supplier--list" category=PAGE_CAT_LIST>
            <PageHeader title="Suppliers" count=Signal::derive(move || items.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " New supplier"
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
                    search_placeholder="Name, contact, phone or email..."
                />
            </div>

            <Show when=move || show_create.get()>
                <SupplierDetails
                    supplier=None
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
            {move || editing.get().map(|supplier| view! {
                <SupplierDetails
                    supplier=Some(supplier)
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
