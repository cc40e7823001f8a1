use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::a006_cash_account::aggregate::{totals_by_currency, CashAccount};
use contracts::system::roles::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a001_location::api::fetch_locations;
use crate::domain::a006_cash_account::api;
use crate::domain::a006_cash_account::ui::details::CashAccountDetails;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_money;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

impl Searchable for CashAccount {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.currency)
    }
}

fn columns(locations: Signal<Vec<Location>>) -> Vec<Column<CashAccount>> {
    vec![
        Column::new("name", "Account", |a: &CashAccount| {
            let href = format!("/cash-accounts/{}", a.id);
            let name = a.name.clone();
            let inactive = (!a.is_active).then(|| view! { <Badge>"closed"</Badge> });
            view! { <A href=href>{name}</A> " " {inactive} }.into_any()
        })
        .sort_by_key(|a| a.name.to_lowercase()),
        Column::text("location", "Location", move |a: &CashAccount| match a.location_id {
            Some(id) => locations.with_untracked(|list| {
                list.iter()
                    .find(|l| l.id == id)
                    .map(|l| l.name.clone())
                    .unwrap_or_else(|| format!("#{}", id))
            }),
            None => "-".into(),
        }),
        Column::text("currency", "Currency", |a: &CashAccount| a.currency.clone())
            .sort_by_key(|a| a.currency.clone()),
        Column::text("balance", "Balance", |a: &CashAccount| format_money(a.balance))
            .sort_by(|a, b| cmp_f64(a.balance, b.balance))
            .numeric(),
    ]
}

#[component]
pub fn CashAccountsListPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let is_admin = Signal::derive(move || auth.state.with(|s| s.has_role(UserRole::Admin)));

    let items: RwSignal<Vec<CashAccount>> = RwSignal::new(Vec::new());
    let locations: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_accounts().await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(format!("Could not load cash accounts: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    spawn_local(async move {
        match fetch_locations().await {
            Ok(list) => locations.set(list),
            Err(e) => log::warn!("Could not load locations: {}", e),
        }
    });

    let totals = Signal::derive(move || items.with(|list| totals_by_currency(list)));

    let on_saved = Callback::new(move |account: CashAccount| {
        notifications.success(format!("Account \"{}\" created", account.name));
        items.update(|list| upsert_by(list, account, |a| a.id));
        show_create.set(false);
    });

    view! {
        <PageFrame page_id="a006_cash_account--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Cash accounts"
                subtitle="Open an account to see its transactions"
                count=Signal::derive(move || items.with(Vec::len))
            >
                <Show when=move || is_admin.get()>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                        {icon("plus")}
                        " New account"
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
                <div class="totals-bar">
                    {move || {
                        totals
                            .get()
                            .into_iter()
                            .map(|(currency, sum)| view! {
                                <div class="totals-bar__item">
                                    <span class="totals-bar__label">{currency}</span>
                                    <span class="totals-bar__value">{format_money(sum)}</span>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
                <DataTable
                    columns=columns(locations.into())
                    rows=items
                    loading=loading
                    search_placeholder="Account or currency..."
                    empty_text="No cash accounts"
                />
            </div>

            <Show when=move || show_create.get()>
                <CashAccountDetails
                    locations=locations
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
        </PageFrame>
    }
}
