use std::sync::Arc;

use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::a005_purchase_invoice::aggregate::{InvoiceStatus, PurchaseInvoice};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_location::api::fetch_locations;
use crate::domain::a002_product::api::fetch_active_products;
use crate::domain::a003_supplier::api::fetch_suppliers;
use crate::domain::a005_purchase_invoice::api;
use crate::domain::a005_purchase_invoice::ui::details::PurchaseInvoiceDetails;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::modal_form::confirm;
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_price;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

impl Searchable for PurchaseInvoice {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.invoice_number,
            self.supplier_name.as_deref().unwrap_or(""),
            self.status.label()
        )
    }
}

fn status_badge(status: InvoiceStatus) -> AnyView {
    let variant = match status {
        InvoiceStatus::Draft => "warning",
        InvoiceStatus::Received => "success",
        InvoiceStatus::Cancelled => "neutral",
    };
    view! { <Badge variant=variant>{status.label()}</Badge> }.into_any()
}

fn columns(suppliers: Signal<Vec<Supplier>>) -> Vec<Column<PurchaseInvoice>> {
    vec![
        Column::text("invoice_number", "Number", |i: &PurchaseInvoice| i.invoice_number.clone())
            .sort_by_key(|i| i.invoice_number.clone()),
        Column::text("invoice_date", "Date", |i: &PurchaseInvoice| format_date(&i.invoice_date))
            .sort_by_key(|i| i.invoice_date.clone()),
        Column::text("supplier", "Supplier", move |i: &PurchaseInvoice| {
            i.supplier_name.clone().unwrap_or_else(|| {
                suppliers.with_untracked(|list| {
                    list.iter()
                        .find(|s| s.id == i.supplier_id)
                        .map(|s| s.name.clone())
                        .unwrap_or_else(|| format!("#{}", i.supplier_id))
                })
            })
        }),
        Column::new("status", "Status", |i: &PurchaseInvoice| status_badge(i.status))
            .sort_by_key(|i| i.status.label()),
        Column::text("lines", "Lines", |i: &PurchaseInvoice| i.lines.len().to_string()).numeric(),
        Column::text("total", "Total", |i: &PurchaseInvoice| format_price(i.total))
            .sort_by(|a, b| cmp_f64(a.total, b.total))
            .numeric(),
    ]
}

/// Read-only list of an invoice's lines.
#[component]
fn InvoiceLines(invoice: PurchaseInvoice, on_close: Callback<()>) -> impl IntoView {
    let rows = invoice
        .lines
        .iter()
        .map(|line| {
            let name = line
                .product_name
                .clone()
                .unwrap_or_else(|| format!("Product #{}", line.product_id));
            let quantity = line.quantity;
            let unit_cost = format_price(line.unit_cost);
            let total = format_price(line.total());
            view! {
                <TableRow>
                    <TableCell>{name}</TableCell>
                    <TableCell class="text-right">{quantity}</TableCell>
                    <TableCell class="text-right">{unit_cost}</TableCell>
                    <TableCell class="text-right">{total}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal modal--wide" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{format!("Invoice {}", invoice.invoice_number)}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Qty"</TableHeaderCell>
                                <TableHeaderCell>"Unit cost"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                    <p class="text-right">
                        <strong>{format!("Total: {}", format_price(invoice.total))}</strong>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PurchaseInvoicesListPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let items: RwSignal<Vec<PurchaseInvoice>> = RwSignal::new(Vec::new());
    let suppliers: RwSignal<Vec<Supplier>> = RwSignal::new(Vec::new());
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let locations: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);
    let viewing: RwSignal<Option<PurchaseInvoice>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_invoices().await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(format!("Could not load invoices: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    // Reference data for the create form
    spawn_local(async move {
        match fetch_suppliers().await {
            Ok(list) => suppliers.set(list),
            Err(e) => log::warn!("Could not load suppliers: {}", e),
        }
        match fetch_active_products().await {
            Ok(list) => products.set(list),
            Err(e) => log::warn!("Could not load products: {}", e),
        }
        match fetch_locations().await {
            Ok(list) => locations.set(list),
            Err(e) => log::warn!("Could not load locations: {}", e),
        }
    });

    let on_saved = Callback::new(move |invoice: PurchaseInvoice| {
        notifications.success(format!("Invoice {} created as draft", invoice.invoice_number));
        items.update(|list| upsert_by(list, invoice, |i| i.id));
        show_create.set(false);
    });

    let receive = move |invoice: PurchaseInvoice| {
        if !confirm(&format!(
            "Receive invoice {} into stock? This cannot be undone.",
            invoice.invoice_number
        )) {
            return;
        }
        spawn_local(async move {
            match api::receive_invoice(invoice.id).await {
                Ok(updated) => {
                    notifications.success(format!("Invoice {} received", updated.invoice_number));
                    items.update(|list| upsert_by(list, updated, |i| i.id));
                }
                Err(e) => notifications.error(format!("Could not receive invoice: {}", e)),
            }
        });
    };

    let actions: CellRenderer<PurchaseInvoice> = Arc::new(move |i: &PurchaseInvoice| {
        let for_view = i.clone();
        let for_receive = i.clone();
        let can_receive = i.status.can_receive();
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| viewing.set(Some(for_view.clone()))
                attr:title="Lines"
            >
                {icon("filter")}
            </Button>
            {can_receive.then(|| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| receive(for_receive.clone())
                    attr:title="Receive into stock"
                >
                    {icon("check")}
                </Button>
            })}
        }
        .into_any()
    });

    let default_location = auth.state.with_untracked(|s| s.location_id());

    view! {
        <PageFrame page_id="a005_purchase_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title="Purchases" count=Signal::derive(move || items.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " New invoice"
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
                    columns=columns(suppliers.into())
                    rows=items
                    loading=loading
                    actions=actions
                    search_placeholder="Number, supplier or status..."
                    empty_text="No purchase invoices"
                />
            </div>

            <Show when=move || show_create.get()>
                <PurchaseInvoiceDetails
                    suppliers=suppliers
                    products=products
                    locations=locations
                    default_location=default_location
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
            {move || viewing.get().map(|invoice| view! {
                <InvoiceLines invoice=invoice on_close=Callback::new(move |_| viewing.set(None)) />
            })}
        </PageFrame>
    }
}
