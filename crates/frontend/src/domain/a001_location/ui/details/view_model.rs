use contracts::domain::a001_location::aggregate::{Location, LocationDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_location::api;

#[derive(Clone, Copy)]
pub struct LocationDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<LocationDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl LocationDetailsViewModel {
    pub fn new(location: Option<&Location>) -> Self {
        let form = match location {
            Some(l) => LocationDto::from_location(l),
            None => LocationDto {
                is_active: true,
                ..Default::default()
            },
        };
        Self {
            id: location.map(|l| l.id),
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn save_command(&self, on_saved: Callback<Location>) {
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
                Some(id) => api::update_location(id, &dto).await,
                None => api::create_location(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(location) => on_saved.run(location),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}
