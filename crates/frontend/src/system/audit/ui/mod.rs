use contracts::domain::common::validation::non_empty;
use contracts::system::audit::{AuditLogEntry, AuditQuery};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::form::{id_to_value, parse_id};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::audit::api;
use crate::system::users::api::fetch_users;

const ENTITY_TYPES: [&str; 11] = [
    "product",
    "order",
    "customer",
    "supplier",
    "purchase_invoice",
    "cash_account",
    "cash_transaction",
    "lost_sale",
    "location",
    "user",
    "shift",
];

const PREVIEW_CHARS: usize = 80;

/// Filter inputs as typed; turned into a query on "Apply".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    pub entity_type: String,
    pub user_id: Option<i64>,
    pub date_from: String,
    pub date_to: String,
}

impl AuditFilter {
    /// First page for these filters.
    pub fn to_query(&self, limit: usize) -> Result<AuditQuery, String> {
        let query = AuditQuery {
            entity_type: non_empty(&self.entity_type),
            user_id: self.user_id,
            date_from: non_empty(&self.date_from),
            date_to: non_empty(&self.date_to),
            limit,
            offset: 0,
        };
        query.validate()?;
        Ok(query)
    }
}

/// The server returns no total, so a full page means there may be more.
pub fn has_next_page(returned: usize, limit: usize) -> bool {
    limit > 0 && returned >= limit
}

pub fn shift_page(query: &AuditQuery, forward: bool) -> AuditQuery {
    let offset = if forward {
        query.offset + query.limit
    } else {
        query.offset.saturating_sub(query.limit)
    };
    AuditQuery { offset, ..query.clone() }
}

fn action_variant(action: &str) -> &'static str {
    match action {
        "create" => "success",
        "delete" => "error",
        "update" | "status_change" => "primary",
        _ => "neutral",
    }
}

#[component]
pub fn AuditLogPage() -> impl IntoView {
    let entries: RwSignal<Vec<AuditLogEntry>> = RwSignal::new(Vec::new());
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let filter = RwSignal::new(AuditFilter::default());
    let query = RwSignal::new(AuditQuery::default());
    let expanded: RwSignal<Option<i64>> = RwSignal::new(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move |next: AuditQuery| {
        query.set(next.clone());
        expanded.set(None);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_audit_logs(&next).await {
                Ok(page) => entries.set(page),
                Err(e) => set_error.set(Some(format!("Could not load audit log: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load(AuditQuery::default());

    spawn_local(async move {
        match fetch_users().await {
            Ok(list) => users.set(list),
            Err(e) => log::warn!("Could not load users for the audit filter: {}", e),
        }
    });

    let apply = move |_| {
        let limit = query.with_untracked(|q| q.limit);
        match filter.with_untracked(|f| f.to_query(limit)) {
            Ok(next) => load(next),
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    let reset = move |_| {
        filter.set(AuditFilter::default());
        load(AuditQuery::default());
    };

    let entity_options: Vec<(String, String)> = ENTITY_TYPES
        .iter()
        .map(|t| (t.to_string(), t.replace('_', " ")))
        .collect();
    let user_options = Signal::derive(move || {
        users.with(|list| {
            list.iter()
                .map(|u| (u.id.to_string(), u.username.clone()))
                .collect::<Vec<_>>()
        })
    });

    let can_prev = Signal::derive(move || query.with(|q| q.offset > 0) && !loading.get());
    let can_next = Signal::derive(move || {
        has_next_page(entries.with(Vec::len), query.with(|q| q.limit)) && !loading.get()
    });

    view! {
        <PageFrame page_id="sys_audit--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Audit log">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load(query.get_untracked())
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <Select
                    label="Entity"
                    value=Signal::derive(move || filter.with(|f| f.entity_type.clone()))
                    on_change=Callback::new(move |v: String| filter.update(|f| f.entity_type = v))
                    options=entity_options
                    placeholder="All entities"
                />
                <Select
                    label="User"
                    value=Signal::derive(move || filter.with(|f| id_to_value(f.user_id)))
                    on_change=Callback::new(move |v: String| filter.update(|f| f.user_id = parse_id(&v)))
                    options=user_options
                    placeholder="All users"
                />
                <Input
                    label="From"
                    input_type="date"
                    value=Signal::derive(move || filter.with(|f| f.date_from.clone()))
                    on_input=Callback::new(move |v: String| filter.update(|f| f.date_from = v))
                />
                <Input
                    label="To"
                    input_type="date"
                    value=Signal::derive(move || filter.with(|f| f.date_to.clone()))
                    on_input=Callback::new(move |v: String| filter.update(|f| f.date_to = v))
                />
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Primary on_click=apply>
                        {icon("filter")}
                        " Apply"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=reset>
                        {icon("x")}
                        " Reset"
                    </Button>
                </Flex>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"When"</TableHeaderCell>
                                <TableHeaderCell>"User"</TableHeaderCell>
                                <TableHeaderCell>"Action"</TableHeaderCell>
                                <TableHeaderCell>"Entity"</TableHeaderCell>
                                <TableHeaderCell>"Details"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = entries.get();
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="5" class="table__empty">
                                                "No entries for these filters"
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|entry| view! { <AuditRow entry=entry expanded=expanded /> })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </Show>

                <div class="pagination-controls">
                    <button
                        class="pagination-btn"
                        disabled=move || !can_prev.get()
                        on:click=move |_| load(query.with_untracked(|q| shift_page(q, false)))
                    >
                        {icon("chevron-left")}
                    </button>
                    <span class="pagination-info">
                        {move || format!("Page {}", query.with(AuditQuery::page) + 1)}
                    </span>
                    <button
                        class="pagination-btn"
                        disabled=move || !can_next.get()
                        on:click=move |_| load(query.with_untracked(|q| shift_page(q, true)))
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn AuditRow(entry: AuditLogEntry, expanded: RwSignal<Option<i64>>) -> impl IntoView {
    let id = entry.id;
    let is_open = move || expanded.get() == Some(id);
    let toggle = move |_| expanded.update(|e| *e = if *e == Some(id) { None } else { Some(id) });
    let user = entry
        .username
        .clone()
        .or_else(|| entry.user_id.map(|u| format!("#{}", u)))
        .unwrap_or_else(|| "system".into());
    let entity = match entry.entity_id {
        Some(eid) => format!("{} #{}", entry.entity_type, eid),
        None => entry.entity_type.clone(),
    };
    let preview = entry.details_preview(PREVIEW_CHARS);
    let has_details = !entry.details.is_null();
    let pretty = StoredValue::new(serde_json::to_string_pretty(&entry.details).unwrap_or_default());
    let variant = action_variant(&entry.action);

    view! {
        <TableRow class="audit__row" on:click=toggle>
            <TableCell>{format_datetime(&entry.occurred_at)}</TableCell>
            <TableCell>{user}</TableCell>
            <TableCell>
                <Badge variant=variant>{entry.action.clone()}</Badge>
            </TableCell>
            <TableCell>{entity}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    {has_details.then(|| view! {
                        <span class="audit__toggle">
                            {move || icon(if is_open() { "chevron-down" } else { "chevron-right" })}
                        </span>
                    })}
                    <code class="audit__preview">{preview}</code>
                </TableCellLayout>
            </TableCell>
        </TableRow>
        <Show when=move || has_details && is_open()>
            <TableRow class="audit__details">
                <TableCell attr:colspan="5">
                    <pre class="json-view">{pretty.get_value()}</pre>
                </TableCell>
            </TableRow>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_to_query() {
        let filter = AuditFilter {
            entity_type: " product ".into(),
            user_id: Some(4),
            date_from: "2024-05-01".into(),
            date_to: "".into(),
        };
        let query = filter.to_query(50).unwrap();
        assert_eq!(query.entity_type.as_deref(), Some("product"));
        assert_eq!(query.user_id, Some(4));
        assert_eq!(query.date_from.as_deref(), Some("2024-05-01"));
        assert_eq!(query.date_to, None);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_filter_rejects_reversed_dates() {
        let filter = AuditFilter {
            date_from: "2024-06-01".into(),
            date_to: "2024-05-01".into(),
            ..Default::default()
        };
        assert!(filter.to_query(50).is_err());
    }

    #[test]
    fn test_paging() {
        let first = AuditQuery::default();
        let second = shift_page(&first, true);
        assert_eq!(second.offset, 50);
        assert_eq!(second.page(), 1);
        assert_eq!(shift_page(&second, false).offset, 0);
        assert_eq!(shift_page(&first, false).offset, 0);
        assert!(has_next_page(50, 50));
        assert!(!has_next_page(12, 50));
        assert!(!has_next_page(0, 0));
    }
}
