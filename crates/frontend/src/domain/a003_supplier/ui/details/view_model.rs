use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_supplier::api;

#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SupplierDetailsViewModel {
    pub fn new(supplier: Option<&Supplier>) -> Self {
        Self {
            id: supplier.map(|s| s.id),
            form: RwSignal::new(supplier.map(SupplierDto::from_supplier).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, on_saved: Callback<Supplier>) {
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
                Some(id) => api::update_supplier(id, &dto).await,
                None => api::create_supplier(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(supplier) => on_saved.run(supplier),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}
