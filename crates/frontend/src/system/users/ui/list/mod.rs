use std::sync::Arc;

use contracts::domain::a001_location::aggregate::Location;
use contracts::system::roles::UserRole;
use contracts::system::users::{InvitationResponse, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::UserDetails;
use super::invite::InviteUser;
use crate::domain::a001_location::api::fetch_active_locations;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, upsert_by, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;
use crate::system::users::api;

impl Searchable for User {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.username,
            self.full_name.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or(""),
            self.role.label()
        )
    }
}

fn role_variant(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "error",
        UserRole::Manager => "primary",
        UserRole::Staff => "neutral",
    }
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::text("username", "Username", |u: &User| u.username.clone())
            .sort_by_key(|u| u.username.to_lowercase()),
        Column::text("full_name", "Name", |u: &User| u.full_name.clone().unwrap_or_default())
            .sort_by(|a, b| cmp_text(a.full_name.as_deref(), b.full_name.as_deref())),
        Column::text("email", "Email", |u: &User| u.email.clone().unwrap_or_else(|| "-".into())),
        Column::new("role", "Role", |u: &User| {
            let role = u.role;
            view! { <Badge variant=role_variant(role)>{role.label()}</Badge> }.into_any()
        })
        .sort_by_key(|u| u.role),
        Column::new("is_active", "Status", |u: &User| {
            if u.is_active {
                view! { <Badge variant="success">"active"</Badge> }.into_any()
            } else {
                view! { <Badge>"disabled"</Badge> }.into_any()
            }
        })
        .sort_by_key(|u| !u.is_active),
        Column::text("last_login_at", "Last login", |u: &User| {
            u.last_login_at.as_deref().map(format_datetime).unwrap_or_else(|| "never".into())
        })
        .sort_by_key(|u| u.last_login_at.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let items: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let locations: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let editing: RwSignal<Option<User>> = RwSignal::new(None);
    let show_invite = RwSignal::new(false);

    let current_user_id = move || auth.state.with_untracked(|s| s.user.as_ref().map(|u| u.id));

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => items.set(data),
                Err(e) => set_error.set(Some(format!("Could not load users: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    spawn_local(async move {
        match fetch_active_locations().await {
            Ok(list) => locations.set(list),
            Err(e) => log::warn!("Could not load locations for invitations: {}", e),
        }
    });

    let on_saved = Callback::new(move |user: User| {
        notifications.success(format!("User \"{}\" updated", user.username));
        items.update(|list| upsert_by(list, user, |u| u.id));
        editing.set(None);
    });

    let on_sent = Callback::new(move |response: InvitationResponse| {
        notifications.success(format!("Invitation sent to {}", response.email));
        show_invite.set(false);
    });

    let actions: CellRenderer<User> = Arc::new(move |u: &User| {
        let user = u.clone();
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| editing.set(Some(user.clone()))
                attr:title="Edit"
            >
                {icon("edit")}
            </Button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Users" count=Signal::derive(move || items.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_invite.set(true)>
                    {icon("mail")}
                    " Invite"
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
                    search_placeholder="Username, name, email or role..."
                    empty_text="No users"
                />
            </div>

            {move || editing.get().map(|user| {
                let is_self = current_user_id() == Some(user.id);
                view! {
                    <UserDetails
                        user=user
                        is_self=is_self
                        on_saved=on_saved
                        on_close=Callback::new(move |_| editing.set(None))
                    />
                }
            })}
            <Show when=move || show_invite.get()>
                <InviteUser
                    locations=locations.get_untracked()
                    on_sent=on_sent
                    on_close=Callback::new(move |_| show_invite.set(false))
                />
            </Show>
        </PageFrame>
    }
}
