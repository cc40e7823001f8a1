use contracts::domain::common::validation::non_empty;
use contracts::system::roles::UserRole;
use contracts::system::users::{UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::form::{bind_flag, bind_text};
use crate::system::users::api;

pub fn role_options() -> Vec<(String, String)> {
    UserRole::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect()
}

/// Edit dialog for an existing user. An administrator cannot demote or
/// deactivate their own account.
#[component]
pub fn UserDetails(
    user: User,
    is_self: bool,
    on_saved: Callback<User>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = user.id;
    let form = RwSignal::new(UpdateUserDto::from_user(&user));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let (full_name, set_full_name) = bind_text(
        form,
        |f| f.full_name.clone().unwrap_or_default(),
        |f, v| f.full_name = Some(v),
    );
    let (email, set_email) = bind_text(
        form,
        |f| f.email.clone().unwrap_or_default(),
        |f, v| f.email = Some(v),
    );
    let (role, set_role) = bind_text(
        form,
        |f| f.role.as_str().to_string(),
        |f, v| f.role = UserRole::parse(&v).unwrap_or(f.role),
    );
    let (active, set_active) = bind_flag(form, |f| f.is_active, |f, v| f.is_active = v);

    let submit = Callback::new(move |_| {
        let mut dto = form.get_untracked();
        dto.full_name = dto.full_name.as_deref().and_then(non_empty);
        dto.email = dto.email.as_deref().and_then(non_empty);
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::update_user(id, &dto).await;
            saving.set(false);
            match result {
                Ok(user) => on_saved.run(user),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <ModalForm
            title=format!("Edit user {}", user.username)
            on_submit=submit
            on_close=on_close
            busy=saving
            error=error
        >
            <Input label="Full name" value=full_name on_input=set_full_name />
            <Input label="Email" value=email on_input=set_email input_type="email" />
            <Select
                label="Role"
                value=role
                on_change=set_role
                options=role_options()
                disabled=is_self
            />
            <Checkbox label="Active" checked=active on_change=set_active disabled=is_self />
            {is_self.then(|| view! {
                <p class="form__hint">"You cannot change the role or status of your own account."</p>
            })}
        </ModalForm>
    }
}
