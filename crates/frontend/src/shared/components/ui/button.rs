use leptos::prelude::*;

use crate::shared::icons::icon;

/// Plain `<button type="button">` for use inside forms, where a thaw button
/// would submit the surrounding form.
#[component]
pub fn Button(
    /// "primary", "secondary" (default), "ghost" or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Icon name from `shared::icons`, shown before the label
    #[prop(optional, into)]
    icon_name: Option<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("secondary") {
        "primary" => "button--primary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--secondary",
    };

    view! {
        <button
            type="button"
            class=move || format!("button {}", variant_class())
            title=move || title.get()
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {icon_name.map(|name| icon(&name))}
            {children.map(|c| c())}
        </button>
    }
}
