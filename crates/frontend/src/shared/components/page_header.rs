use leptos::prelude::*;

/// Standard page header: title, optional record counter, actions on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional, into)] count: Option<Signal<usize>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {count.map(|c| view! {
                    <span class="badge badge--neutral">{move || c.get().to_string()}</span>
                })}
                {move || subtitle.get().map(|s| view! { <span class="page__subtitle">{s}</span> })}
            </div>
            <div class="page__header-right">{children.map(|c| c())}</div>
        </div>
    }
}
