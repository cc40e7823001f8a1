//! Top bar: sidebar toggle, title, active shift and the signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::global_context::use_layout;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn TopHeader() -> impl IntoView {
    let layout = use_layout();
    let auth = use_auth();

    let user_label = move || {
        auth.state.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("{} · {}", u.display_name(), u.role.label()))
                .unwrap_or_default()
        })
    };

    let shift_label = move || {
        auth.state
            .with(|s| s.shift.as_ref().filter(|sh| sh.is_open()).map(|sh| sh.location_label()))
    };

    // Logout only drops the session; the guard then redirects to /login
    let logout = move |_| auth.logout();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_sidebar()
                    title=move || if layout.sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{config().ui.app_title.clone()}</span>
            </div>

            <div class="top-header__actions">
                {move || match shift_label() {
                    Some(location) => view! {
                        <div class="top-header__shift">
                            {icon("shift")}
                            <span>{location}</span>
                            <A href="/shift" attr:class="top-header__link" attr:title="Close the shift">
                                "End shift"
                            </A>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <A href="/shift" attr:class="top-header__link">
                            {icon("shift")}
                            " Start shift"
                        </A>
                    }
                    .into_any(),
                }}

                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_label}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
