//! Sidebar navigation, grouped and filtered by the signed-in user's role.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_layout;
use crate::routes::routes::{is_nav_active, visible_nav_items, NavItem, NAV_GROUPS};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let layout = use_layout();
    let location = use_location();

    let items = Memo::new(move |_| visible_nav_items(auth.state.with(|s| s.role())));

    let groups = move || {
        let items = items.get();
        NAV_GROUPS
            .iter()
            .filter_map(|&group| {
                let entries: Vec<_> = items.iter().filter(|i| i.group == group).copied().collect();
                if entries.is_empty() {
                    return None;
                }
                let is_expanded = move || layout.expanded_groups.with(|g| g.contains(&group));
                Some(view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item app-sidebar__group-title"
                            on:click=move |_| layout.toggle_group(group)
                        >
                            <span>{group}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {entries
                                    .iter()
                                    .copied()
                                    .map(|entry| {
                                        let NavItem { path, label, icon: icon_name, .. } = entry;
                                        let active = move || location.pathname.with(|p| is_nav_active(p, path));
                                        view! {
                                            <A
                                                href=path
                                                attr:class=move || {
                                                    if active() {
                                                        "app-sidebar__item app-sidebar__item--active"
                                                    } else {
                                                        "app-sidebar__item"
                                                    }
                                                }
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                })
            })
            .collect_view()
    };

    view! {
        <nav class="app-sidebar__content">
            {groups}
        </nav>
    }
}
