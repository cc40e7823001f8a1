use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Modal dialog wrapping a form.
///
/// Escape, the close button and a click on the overlay all call `on_close`.
/// None of them closes the dialog while `busy` is set.
#[component]
pub fn ModalForm(
    #[prop(into)] title: Signal<String>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] submit_label: Option<String>,
    /// Extra class on the dialog, e.g. `modal--wide`
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Save".to_string());
    let dialog_class = match class {
        Some(extra) => format!("modal {}", extra),
        None => "modal".to_string(),
    };

    let close = move || {
        if !busy.get_untracked() {
            on_close.run(());
        }
    };
    let keydown = window_event_listener(ev::keydown, move |event| {
        if closes_on_key(&event.key(), busy.get_untracked()) {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class=dialog_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <form on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    if !busy.get_untracked() {
                        on_submit.run(());
                    }
                }>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button
                            type="button"
                            class="button button--icon modal__close"
                            on:click=move |_| close()
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <div class="modal-body">
                        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                        {children()}
                    </div>

                    <div class="modal-footer">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| close()
                            disabled=move || busy.get()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="button button--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving...".to_string() } else { submit_label.clone() }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn closes_on_key(key: &str, busy: bool) -> bool {
    key == "Escape" && !busy
}

/// Browser confirm dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ignored_while_busy() {
        assert!(closes_on_key("Escape", false));
        assert!(!closes_on_key("Escape", true));
        assert!(!closes_on_key("Enter", false));
    }
}
