pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use global_context::LayoutContext;
use left::Sidebar;
use top_header::TopHeader;

/// Application shell around every signed-in page.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let layout = LayoutContext::new();
    provide_context(layout);

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !layout.sidebar_open.get()>
                    <Sidebar />
                </div>
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
