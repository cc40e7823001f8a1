use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"There is nothing at this address."</p>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}
