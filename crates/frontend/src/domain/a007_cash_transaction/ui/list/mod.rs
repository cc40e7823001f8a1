use contracts::domain::a006_cash_account::aggregate::CashAccount;
use contracts::domain::a007_cash_transaction::aggregate::{CashTransaction, TransactionKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a006_cash_account::api::{fetch_account, fetch_accounts};
use crate::domain::a007_cash_transaction::api;
use crate::domain::a007_cash_transaction::ui::details::CashTransactionDetails;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::format_money;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::form::parse_id;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

impl Searchable for CashTransaction {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.kind.label(),
            self.description,
            self.created_by.as_deref().unwrap_or("")
        )
    }
}

fn kind_badge(kind: TransactionKind) -> AnyView {
    let variant = match kind {
        TransactionKind::Deposit => "success",
        TransactionKind::Withdrawal => "error",
        TransactionKind::Transfer => "primary",
    };
    view! { <Badge variant=variant>{kind.label()}</Badge> }.into_any()
}

fn columns(accounts: Signal<Vec<CashAccount>>) -> Vec<Column<CashTransaction>> {
    vec![
        Column::text("created_at", "Date", |t: &CashTransaction| format_datetime(&t.created_at))
            .sort_by_key(|t| t.created_at.clone()),
        Column::new("kind", "Type", |t: &CashTransaction| kind_badge(t.kind))
            .sort_by_key(|t| t.kind.as_str()),
        Column::text("description", "Description", move |t: &CashTransaction| {
            match t.counter_account_id {
                Some(id) => {
                    let other = accounts.with_untracked(|list| {
                        list.iter()
                            .find(|a| a.id == id)
                            .map(|a| a.name.clone())
                            .unwrap_or_else(|| format!("#{}", id))
                    });
                    format!("{} (to {})", t.description, other)
                }
                None => t.description.clone(),
            }
        }),
        Column::text("created_by", "By", |t: &CashTransaction| {
            t.created_by.clone().unwrap_or_else(|| "-".into())
        }),
        Column::text("amount", "Amount", |t: &CashTransaction| {
            format_money(t.kind.signed(t.amount))
        })
        .sort_by(|a, b| cmp_f64(a.kind.signed(a.amount), b.kind.signed(b.amount)))
        .numeric(),
    ]
}

/// Transactions of one cash account (`/cash-accounts/:id`).
#[component]
pub fn CashTransactionsPage() -> impl IntoView {
    let params = use_params_map();
    let notifications = use_notifications();
    let account_id = Signal::derive(move || params.with(|p| p.get("id").and_then(|id| parse_id(&id))));

    let account: RwSignal<Option<CashAccount>> = RwSignal::new(None);
    let accounts: RwSignal<Vec<CashAccount>> = RwSignal::new(Vec::new());
    let items: RwSignal<Vec<CashTransaction>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);

    let load_data = move || {
        let Some(id) = account_id.get_untracked() else {
            set_error.set(Some("Unknown cash account".into()));
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_account(id).await {
                Ok(a) => account.set(Some(a)),
                Err(e) => set_error.set(Some(format!("Could not load account: {}", e))),
            }
            match api::fetch_transactions(id).await {
                Ok(mut data) => {
                    data.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    items.set(data);
                }
                Err(e) => set_error.set(Some(format!("Could not load transactions: {}", e))),
            }
            set_loading.set(false);
        });
    };

    // Reload when the route parameter changes
    Effect::new(move |_| {
        account_id.track();
        load_data();
    });

    spawn_local(async move {
        match fetch_accounts().await {
            Ok(list) => accounts.set(list),
            Err(e) => log::warn!("Could not load cash accounts: {}", e),
        }
    });

    let on_saved = Callback::new(move |tx: CashTransaction| {
        notifications.success(format!("{} of {} posted", tx.kind.label(), format_money(tx.amount)));
        show_create.set(false);
        // The server moves the balances; reload to show them
        load_data();
    });

    let title = Signal::derive(move || {
        account
            .get()
            .map(|a| a.name)
            .unwrap_or_else(|| "Cash account".to_string())
    });
    let balance = Signal::derive(move || {
        account.get().map(|a| format!("{} {}", format_money(a.balance), a.currency))
    });
    let deposits = Signal::derive(move || {
        items.with(|list| {
            let sum: f64 = list
                .iter()
                .filter(|t| t.kind == TransactionKind::Deposit)
                .map(|t| t.amount)
                .sum();
            Some(format_money(sum))
        })
    });
    let outgoing = Signal::derive(move || {
        items.with(|list| {
            let sum: f64 = list
                .iter()
                .filter(|t| t.kind != TransactionKind::Deposit)
                .map(|t| t.amount)
                .sum();
            Some(format_money(sum))
        })
    });

    view! {
        <PageFrame page_id="a007_cash_transaction--list" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/cash-accounts" attr:class="button button--ghost">
                        {icon("chevron-left")}
                        " Accounts"
                    </A>
                    <h1 class="page__title">{move || title.get()}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create.set(true)
                        disabled=Signal::derive(move || account.with(|a| !matches!(a, Some(a) if a.is_active)))
                    >
                        {icon("plus")}
                        " New transaction"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="stat-grid">
                    <StatCard label="Balance" icon_name="cash" value=balance tone=StatTone::Good />
                    <StatCard label="Deposits" icon_name="plus" value=deposits />
                    <StatCard label="Withdrawals and transfers" icon_name="minus" value=outgoing />
                </div>
                <DataTable
                    columns=columns(accounts.into())
                    rows=items
                    loading=loading
                    search_placeholder="Type, description or user..."
                    empty_text="No transactions yet"
                />
            </div>

            {move || {
                account.get().filter(|_| show_create.get()).map(|acc| view! {
                    <CashTransactionDetails
                        account=acc
                        accounts=accounts
                        on_saved=on_saved
                        on_close=Callback::new(move |_| show_create.set(false))
                    />
                })
            }}
        </PageFrame>
    }
}
