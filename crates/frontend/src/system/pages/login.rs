use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::shared::config::config;
use crate::system::auth::context::{use_auth, AuthState};

/// Where a signed-in user lands: the shift picker until a shift is open.
pub fn landing_path(state: &AuthState) -> &'static str {
    if state.has_shift() {
        "/"
    } else {
        "/shift"
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Success updates the auth state, which renders the redirect below
            if let Err(e) = auth.login(username_val, password_val).await {
                log::warn!("Login failed: {}", e);
                set_error_message.set(Some(e.to_string()));
                set_password.set(String::new());
            }
            set_is_loading.set(false);
        });
    };

    let redirect = move || {
        auth.state.with(|s| {
            s.is_authenticated()
                .then(|| view! { <Redirect path=landing_path(s) /> })
        })
    };

    view! {
        {redirect}
        <div class="login-container">
            <div class="login-box">
                <h1>{config().ui.app_title.clone()}</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a010_shift::aggregate::Shift;

    #[test]
    fn test_landing_path() {
        let mut state = AuthState {
            access_token: Some("token".into()),
            user: None,
            shift: None,
        };
        assert_eq!(landing_path(&state), "/shift");
        state.shift = Some(Shift {
            id: 3,
            user_id: 1,
            location_id: 2,
            location_name: Some("Main street".into()),
            started_at: "2024-05-01T09:00:00Z".into(),
            ended_at: None,
            opening_cash: None,
        });
        assert_eq!(landing_path(&state), "/");
    }
}
