use contracts::domain::a001_material::{Material, MaterialForm, MaterialId};
use contracts::domain::common::AggregateId;
use contracts::shared::validation::{message_for, FieldError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_material::api;

/// ViewModel for the material create/edit dialog
#[derive(Clone, Copy)]
pub struct MaterialFormViewModel {
    pub form: RwSignal<MaterialForm>,
    /// Per-field messages from the last validation
    pub field_errors: RwSignal<Vec<FieldError>>,
    /// Request failure shown above the form
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl MaterialFormViewModel {
    pub fn new(initial: MaterialForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            field_errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors
            .with(|errors| message_for(errors, field).map(str::to_string))
    }

    /// Edit one field; its stale message goes away with the edit
    pub fn set_field(&self, field: &str, apply: impl FnOnce(&mut MaterialForm)) {
        self.form.update(apply);
        self.field_errors.update(|errors| errors.retain(|e| e.field != field));
    }

    /// Validate, then create or update; `on_saved` receives the stored record
    pub fn save_command(&self, on_saved: Callback<Material>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();

        let payload = match current.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors.set(errors);
                return;
            }
        };
        let id = match current.id.as_deref().map(MaterialId::from_string).transpose() {
            Ok(id) => id,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        self.field_errors.set(Vec::new());
        self.error.set(None);
        self.saving.set(true);

        let error = self.error;
        let saving = self.saving;
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update(id, &payload).await,
                None => api::create(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(material) => {
                    log::info!("material {} saved", material.codigo);
                    on_saved.run(material);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
