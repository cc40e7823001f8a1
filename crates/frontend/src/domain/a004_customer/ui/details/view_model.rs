use contracts::domain::a004_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_customer::api;

#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new(customer: Option<&Customer>) -> Self {
        Self {
            id: customer.map(|c| c.id),
            form: RwSignal::new(customer.map(CustomerDto::from_customer).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn save_command(&self, on_saved: Callback<Customer>) {
        let dto = self.form.get_untracked().normalized();
        if let Err(msg) = dto.validate() {
            self.error.set(Some(msg));
            return;
        }

        let (id, error, saving) = (self.id, self.error, self.saving);
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_customer(id, &dto).await,
                None => api::create_customer(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(customer) => on_saved.run(customer),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}
