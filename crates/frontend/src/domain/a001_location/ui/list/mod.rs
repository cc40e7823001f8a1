use std::sync::Arc;

use contracts::domain::a001_location::aggregate::Location;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_location::api;
use crate::domain::a001_location::ui::details::LocationDetails;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Location {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.kind.label(),
            self.address.as_deref().unwrap_or(""),
            self.phone.as_deref().unwrap_or("")
        )
    }
}

fn columns() -> Vec<Column<Location>> {
    vec![
        Column::text("name", "Name", |l: &Location| l.name.clone())
            .sort_by_key(|l| l.name.to_lowercase()),
        Column::text("kind", "Type", |l: &Location| l.kind.label().to_string())
            .sort_by_key(|l| l.kind.as_str()),
        Column::text("address", "Address", |l: &Location| {
            l.address.clone().unwrap_or_else(|| "-".into())
        }),
        Column::text("phone", "Phone", |l: &Location| {
            l.phone.clone().unwrap_or_else(|| "-".into())
        }),
        Column::new("is_active", "Status", |l: &Location| {
            if l.is_active {
                view! { <Badge variant="success">"Active"</Badge> }.into_any()
            } else {
                view! { <Badge variant="error">"Inactive"</Badge> }.into_any()
            }
        })
        .sort_by_key(|l| !l.is_active),
    ]
}

#[component]
pub fn LocationsListPage() -> impl IntoView {
    let notifications = use_notifications();
    let items: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);
    let editing: RwSignal<Option<Location>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_locations().await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(format!("Could not load locations: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let on_saved = Callback::new(move |location: Location| {
        notifications.success(format!("Location \"{}\" saved", location.name));
        items.update(|list| upsert_by(list, location, |l| l.id));
        show_create.set(false);
        editing.set(None);
    });

    let actions: CellRenderer<Location> = Arc::new(move |l: &Location| {
        let location = l.clone();
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| editing.set(Some(location.clone()))
                attr:title="Edit"
            >
                {icon("edit")}
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a001_location--list" category=PAGE_CAT_LIST>
            <PageHeader title="Locations" count=Signal::derive(move || items.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " New location"
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
                    search_placeholder="Name, address or phone..."
                />
            </div>

            <Show when=move || show_create.get()>
                <LocationDetails
                    location=None
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
            {move || editing.get().map(|location| view! {
                <LocationDetails
                    location=Some(location)
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
