//! Column-driven table with search, sorting and client-side paging.
//!
//! ```ignore
//! let columns = vec![
//!     Column::text("sku", "SKU", |p: &Product| p.sku.clone()).sort_by_key(|p| p.sku.clone()),
//!     Column::text("name", "Name", |p: &Product| p.name.clone()),
//!     Column::new("price", "Price", |p: &Product| format_money(p.price).into_any())
//!         .sort_by(|a, b| cmp_f64(a.price, b.price))
//!         .numeric(),
//! ];
//! view! { <DataTable columns rows=products loading /> }
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, Searchable};

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
pub type RowComparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

pub struct Column<T> {
    pub key: &'static str,
    pub title: &'static str,
    pub render: CellRenderer<T>,
    pub compare: Option<RowComparator<T>>,
    pub numeric: bool,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title,
            render: self.render.clone(),
            compare: self.compare.clone(),
            numeric: self.numeric,
        }
    }
}

impl<T: 'static> Column<T> {
    pub fn new(
        key: &'static str,
        title: &'static str,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            title,
            render: Arc::new(render),
            compare: None,
            numeric: false,
        }
    }

    /// Plain text cell.
    pub fn text(
        key: &'static str,
        title: &'static str,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, title, move |row| value(row).into_any())
    }

    pub fn sort_by(mut self, compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.compare = Some(Arc::new(compare));
        self
    }

    pub fn sort_by_key<K: Ord>(self, key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        self.sort_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Right-aligned cell and header.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.compare.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortState {
    pub key: Option<&'static str>,
    pub ascending: bool,
}

impl SortState {
    /// Same column flips the direction, a new column starts ascending.
    pub fn toggle(&mut self, key: &'static str) {
        if self.key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

pub fn filter_rows<T: Searchable + Clone>(rows: &[T], query: &str) -> Vec<T> {
    rows.iter()
        .filter(|row| row.matches_filter(query))
        .cloned()
        .collect()
}

/// Stable sort by the column named in `sort`; unknown or unsortable
/// columns keep the incoming order.
pub fn sort_rows<T>(rows: &mut [T], columns: &[Column<T>], sort: &SortState) {
    let Some(key) = sort.key else {
        return;
    };
    let Some(compare) = columns
        .iter()
        .find(|c| c.key == key)
        .and_then(|c| c.compare.as_ref())
    else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = compare(a, b);
        if sort.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Cuts one page out of `rows`. A page past the end is clamped to the last
/// page, so deleting the last row of a page never shows an empty table.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_count = rows.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);
    PageSlice {
        items: rows.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count,
    }
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)] rows: Signal<Vec<T>>,
    #[prop(optional, into)] loading: Signal<bool>,
    /// Extra cell at the end of every row (edit / delete buttons)
    #[prop(optional)]
    actions: Option<CellRenderer<T>>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional)] hide_search: bool,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(config().ui.page_size);
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);
    let has_actions = actions.with_value(|a| a.is_some());
    let placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());
    let empty_text = empty_text.unwrap_or_else(|| "Nothing to show".to_string());

    let visible = Signal::derive(move || {
        let mut data = filter_rows(&rows.get(), &search.get());
        let sort_state = sort.get();
        columns.with_value(|cols| sort_rows(&mut data, cols, &sort_state));
        paginate(&data, page.get(), page_size.get())
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let key = col.key;
                let title = col.title;
                let sortable = col.is_sortable();
                let header_class = if col.numeric {
                    "table__sortable-header table__header--numeric"
                } else {
                    "table__sortable-header"
                };
                view! {
                    <TableHeaderCell>
                        <div
                            class=header_class
                            style=if sortable { "cursor: pointer;" } else { "" }
                            on:click=move |_| {
                                if sortable {
                                    sort.update(|s| s.toggle(key));
                                    page.set(0);
                                }
                            }
                        >
                            {title}
                            {sortable.then(|| view! {
                                <span class=move || get_sort_class(sort.get().key.unwrap_or(""), key)>
                                    {move || {
                                        let s = sort.get();
                                        get_sort_indicator(s.key.unwrap_or(""), key, s.ascending)
                                    }}
                                </span>
                            })}
                        </div>
                    </TableHeaderCell>
                }
            })
            .collect_view()
    });

    let render_row = move |row: T| {
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let content = (col.render)(&row);
                    if col.numeric {
                        view! { <TableCell class="text-right">{content}</TableCell> }.into_any()
                    } else {
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>{content}</TableCellLayout>
                            </TableCell>
                        }
                        .into_any()
                    }
                })
                .collect_view()
        });
        let action_cell = actions.with_value(|a| {
            a.as_ref().map(|render| {
                let content = render(&row);
                view! { <TableCell class="table__actions">{content}</TableCell> }
            })
        });
        view! {
            <TableRow>
                {cells}
                {action_cell}
            </TableRow>
        }
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                {(!hide_search).then(|| view! {
                    <input
                        type="search"
                        class="form__input data-table__search"
                        placeholder=placeholder.clone()
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            search.set(event_target_value(&ev));
                            page.set(0);
                        }
                    />
                })}
                <PaginationControls
                    current_page=Signal::derive(move || visible.get().page)
                    total_pages=Signal::derive(move || visible.get().total_pages)
                    total_count=Signal::derive(move || visible.get().total_count)
                    page_size=page_size
                    on_page_change=Callback::new(move |p| page.set(p))
                    on_page_size_change=Callback::new(move |size| {
                        page_size.set(size);
                        page.set(0);
                    })
                />
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            {has_actions.then(|| view! { <TableHeaderCell>""</TableHeaderCell> })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().items.into_iter().map(render_row).collect_view()}
                    </TableBody>
                </Table>

                {move || {
                    let empty = visible.with(|v| v.items.is_empty());
                    if !empty {
                        ().into_any()
                    } else if loading.get() {
                        view! { <div class="data-table__state"><Spinner /></div> }.into_any()
                    } else {
                        let text = empty_text.clone();
                        view! { <div class="data-table__state">{text}</div> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        name: &'static str,
        qty: i64,
    }

    impl Searchable for Item {
        fn search_text(&self) -> String {
            self.name.to_string()
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Battery", qty: 3 },
            Item { name: "adapter", qty: 12 },
            Item { name: "Case", qty: 7 },
            Item { name: "Battery pack", qty: 1 },
        ]
    }

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::text("name", "Name", |i: &Item| i.name.to_string())
                .sort_by_key(|i| i.name.to_lowercase()),
            Column::text("qty", "Qty", |i: &Item| i.qty.to_string())
                .sort_by_key(|i| i.qty)
                .numeric(),
            Column::text("note", "Note", |_: &Item| String::new()),
        ]
    }

    #[test]
    fn test_filter_rows() {
        let found = filter_rows(&items(), "BATT");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|i| i.name.starts_with("Battery")));
        assert_eq!(filter_rows(&items(), "").len(), 4);
        assert!(filter_rows(&items(), "zzz").is_empty());
    }

    #[test]
    fn test_sort_rows() {
        let cols = columns();
        let mut data = items();
        let mut sort = SortState::default();

        sort.toggle("qty");
        sort_rows(&mut data, &cols, &sort);
        assert_eq!(data.iter().map(|i| i.qty).collect::<Vec<_>>(), vec![1, 3, 7, 12]);

        sort.toggle("qty");
        assert!(!sort.ascending);
        sort_rows(&mut data, &cols, &sort);
        assert_eq!(data.iter().map(|i| i.qty).collect::<Vec<_>>(), vec![12, 7, 3, 1]);

        sort.toggle("name");
        assert!(sort.ascending);
        sort_rows(&mut data, &cols, &sort);
        assert_eq!(data[0].name, "adapter");
    }

    #[test]
    fn test_unsortable_column_keeps_order() {
        let cols = columns();
        let mut data = items();
        let sort = SortState { key: Some("note"), ascending: true };
        sort_rows(&mut data, &cols, &sort);
        assert_eq!(data, items());
    }

    #[test]
    fn test_paginate() {
        let data: Vec<i32> = (1..=7).collect();
        let first = paginate(&data, 0, 3);
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 7);

        let last = paginate(&data, 2, 3);
        assert_eq!(last.items, vec![7]);

        let clamped = paginate(&data, 9, 3);
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.items, vec![7]);
    }

    #[test]
    fn test_paginate_empty() {
        let data: Vec<i32> = Vec::new();
        let page = paginate(&data, 3, 25);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 1);
    }
}
