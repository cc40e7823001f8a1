use leptos::prelude::*;

/// Numeric text field. The raw text is kept so the form can show its own
/// validation message instead of the browser's.
#[component]
pub fn NumberInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "0.01" for money, "1" for quantities
    #[prop(optional, into)]
    step: Option<String>,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let step = step.unwrap_or_else(|| "0.01".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                type="number"
                inputmode="decimal"
                class="form__input form__input--numeric"
                step=step
                min=min
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
