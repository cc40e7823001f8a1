use contracts::domain::a001_location::aggregate::Location;
use contracts::system::roles::UserRole;
use contracts::system::users::{InvitationRequest, InvitationResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::role_options;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::form::{id_to_value, parse_id};
use crate::system::users::api;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InviteForm {
    pub email: String,
    pub role: UserRole,
    pub location_id: Option<i64>,
}

impl InviteForm {
    pub fn to_request(&self) -> Result<InvitationRequest, String> {
        let request = InvitationRequest {
            email: self.email.trim().to_string(),
            role: self.role,
            location_id: self.location_id,
        };
        request.validate()?;
        Ok(request)
    }
}

#[component]
pub fn InviteUser(
    locations: Vec<Location>,
    on_sent: Callback<InvitationResponse>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(InviteForm::default());
    let error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);

    let location_options: Vec<(String, String)> = locations
        .iter()
        .map(|l| (l.id.to_string(), l.name.clone()))
        .collect();

    let submit = Callback::new(move |_| {
        let request = match form.with_untracked(InviteForm::to_request) {
            Ok(r) => r,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        sending.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::send_invitation(&request).await;
            sending.set(false);
            match result {
                Ok(response) => on_sent.run(response),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <ModalForm
            title="Invite staff member"
            on_submit=submit
            on_close=on_close
            busy=sending
            error=error
            submit_label="Send invitation"
        >
            <Input
                label="Email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                input_type="email"
                required=true
            />
            <div class="form__row">
                <Select
                    label="Role"
                    value=Signal::derive(move || form.with(|f| f.role.as_str().to_string()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.role = UserRole::parse(&v).unwrap_or_default())
                    })
                    options=role_options()
                />
                <Select
                    label="Home location"
                    value=Signal::derive(move || form.with(|f| id_to_value(f.location_id)))
                    on_change=Callback::new(move |v: String| form.update(|f| f.location_id = parse_id(&v)))
                    options=location_options
                    placeholder="Any location"
                />
            </div>
        </ModalForm>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_trims_email() {
        let form = InviteForm {
            email: "  new.clerk@shop.example ".into(),
            role: UserRole::Manager,
            location_id: Some(3),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.email, "new.clerk@shop.example");
        assert_eq!(request.role, UserRole::Manager);
        assert_eq!(request.location_id, Some(3));
    }

    #[test]
    fn test_invite_rejects_bad_email() {
        let form = InviteForm {
            email: "clerk".into(),
            ..Default::default()
        };
        assert_eq!(form.to_request().unwrap_err(), "Email address is not valid");
    }
}
