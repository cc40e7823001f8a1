use contracts::dashboards::d400_dashboard::dto::{DashboardSummary, LowStockItem, SalesByDay};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::d400_dashboard::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_number_int, format_price, TableCellMoney};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

const SALES_DAYS: u32 = 7;

/// Share of the best day, for the inline bar next to each row.
fn bar_width(revenue: f64, max: f64) -> f64 {
    if max <= 0.0 || !revenue.is_finite() {
        0.0
    } else {
        (revenue / max * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let shift_location = Signal::derive(move || auth.state.with(|s| s.location_id()));
    let shift_label = Signal::derive(move || {
        auth.state
            .with(|s| s.shift.as_ref().map(|sh| sh.location_label()))
    });
    // Figures for the shift's location by default; managers can widen it
    let all_locations = RwSignal::new(false);

    let summary: RwSignal<Option<DashboardSummary>> = RwSignal::new(None);
    let sales: RwSignal<Vec<SalesByDay>> = RwSignal::new(Vec::new());
    let low_stock: RwSignal<Vec<LowStockItem>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_data = move || {
        let location_id = if all_locations.get_untracked() {
            None
        } else {
            shift_location.get_untracked()
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let mut failures = Vec::new();
            match api::get_summary(location_id).await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => failures.push(format!("summary: {}", e)),
            }
            match api::get_sales_by_day(location_id, SALES_DAYS).await {
                Ok(rows) => sales.set(rows),
                Err(e) => failures.push(format!("sales: {}", e)),
            }
            match api::get_low_stock(location_id).await {
                Ok(rows) => low_stock.set(rows),
                Err(e) => failures.push(format!("low stock: {}", e)),
            }
            if !failures.is_empty() {
                set_error.set(Some(format!("Some figures could not be loaded ({})", failures.join("; "))));
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        all_locations.track();
        shift_location.track();
        load_data();
    });

    let stat = move |f: fn(&DashboardSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };
    let low_tone = Signal::derive(move || match summary.with(|s| s.as_ref().map(|s| s.low_stock_count)) {
        Some(n) if n > 0 => StatTone::Warning,
        _ => StatTone::Good,
    });
    let max_revenue = Signal::derive(move || sales.with(|rows| rows.iter().map(|r| r.revenue).fold(0.0, f64::max)));

    view! {
        <PageFrame page_id="d400_dashboard--overview" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Dashboard"
                subtitle=Signal::derive(move || match (all_locations.get(), shift_label.get()) {
                    (false, Some(label)) => Some(label),
                    _ => Some("All locations".to_string()),
                })
            >
                <Show when=move || shift_location.get().is_some()>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || all_locations.get()
                            on:change=move |ev| all_locations.set(event_target_checked(&ev))
                        />
                        " All locations"
                    </label>
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
                {move || error.get().map(|e| view! { <div class="alert alert--warning">{e}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="Sales today"
                        icon_name="cash"
                        value=stat(|s| format_price(s.sales_today))
                        subtitle=Signal::derive(move || {
                            summary.with(|s| {
                                s.as_ref()
                                    .and_then(DashboardSummary::average_ticket)
                                    .map(|avg| format!("avg. ticket {}", format_price(avg)))
                            })
                        })
                        tone=StatTone::Good
                    />
                    <StatCard
                        label="Orders today"
                        icon_name="orders"
                        value=stat(|s| format_number_int(s.orders_today as f64))
                    />
                    <StatCard
                        label="Open orders"
                        icon_name="orders"
                        value=stat(|s| format_number_int(s.orders_open as f64))
                    />
                    <StatCard
                        label="Repairs in progress"
                        icon_name="pos"
                        value=stat(|s| format_number_int(s.repairs_in_progress as f64))
                    />
                    <StatCard
                        label="Low stock items"
                        icon_name="alert"
                        value=stat(|s| format_number_int(s.low_stock_count as f64))
                        tone=low_tone
                    />
                    <StatCard
                        label="Cash on hand"
                        icon_name="cash"
                        value=stat(|s| format_price(s.cash_total))
                    />
                    <StatCard
                        label="Lost sales (7 days)"
                        icon_name="lost-sales"
                        value=stat(|s| format_number_int(s.lost_sales_week as f64))
                    />
                </div>

                <div class="dashboard-grid">
                    <section class="card">
                        <h3 class="card__title">{format!("Sales, last {} days", SALES_DAYS)}</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Day"</TableHeaderCell>
                                    <TableHeaderCell>"Orders"</TableHeaderCell>
                                    <TableHeaderCell>"Revenue"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || sales.get()
                                    key=|row| (row.date.clone(), row.orders, row.revenue.to_bits())
                                    children=move |row| {
                                        let width = bar_width(row.revenue, max_revenue.get_untracked());
                                        let day = format_date(&row.date);
                                        let orders = row.orders;
                                        view! {
                                            <TableRow>
                                                <TableCell>{day}</TableCell>
                                                <TableCell class="text-right">{orders}</TableCell>
                                                <TableCellMoney value=Some(row.revenue) bold=true />
                                                <TableCell>
                                                    <div class="bar">
                                                        <div class="bar__fill" style=format!("width: {:.0}%", width)></div>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </section>

                    <section class="card">
                        <h3 class="card__title">
                            "Low stock "
                            <A href="/products" attr:class="card__link">"all products"</A>
                        </h3>
                        {move || {
                            if low_stock.with(Vec::is_empty) {
                                view! { <p class="text-muted">"Everything is above its reorder level."</p> }.into_any()
                            } else {
                                view! {
                                    <Table>
                                        <TableHeader>
                                            <TableRow>
                                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                                <TableHeaderCell>"Product"</TableHeaderCell>
                                                <TableHeaderCell>"Stock"</TableHeaderCell>
                                                <TableHeaderCell>"Reorder at"</TableHeaderCell>
                                                <TableHeaderCell>"Short"</TableHeaderCell>
                                            </TableRow>
                                        </TableHeader>
                                        <TableBody>
                                            {low_stock
                                                .get()
                                                .into_iter()
                                                .map(|item| {
                                                    let shortfall = item.shortfall();
                                                    let LowStockItem { sku, name, stock_qty, reorder_level, .. } = item;
                                                    view! {
                                                        <TableRow>
                                                            <TableCell>{sku}</TableCell>
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                                            </TableCell>
                                                            <TableCell class="text-right">{stock_qty}</TableCell>
                                                            <TableCell class="text-right">{reorder_level}</TableCell>
                                                            <TableCell class="text-right">{shortfall}</TableCell>
                                                        </TableRow>
                                                    }
                                                })
                                                .collect_view()}
                                        </TableBody>
                                    </Table>
                                }
                                .into_any()
                            }
                        }}
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(200.0, 200.0), 100.0);
        assert_eq!(bar_width(10.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
    }
}
