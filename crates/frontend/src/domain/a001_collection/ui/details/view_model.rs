use contracts::domain::a001_collection::{Collection, CollectionDto, CollectionId, FieldDefinition};
use leptos::prelude::*;

use crate::domain::a001_collection::api;
use crate::shared::browser::alert;
use crate::shared::session::Session;

pub const EMOJI_CHOICES: [&str; 20] = [
    "📦", "📚", "🎮", "🎲", "🎬", "🎵", "🎨", "📷", "⚽", "🎸", "📖", "📰", "🃏", "♟️", "🧩",
    "💎", "🏆", "⭐", "🍷", "🧸",
];

/// Form data for one collection; every part is its own signal so the field
/// editor can update rows without re-rendering the dialog.
#[derive(Clone, Copy)]
pub struct CollectionDetailsViewModel {
    pub id: RwSignal<Option<CollectionId>>,
    pub name: RwSignal<String>,
    pub slug: RwSignal<String>,
    pub icon: RwSignal<String>,
    pub description: RwSignal<String>,
    pub is_public: RwSignal<bool>,
    pub fields: RwSignal<Vec<FieldDefinition>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl CollectionDetailsViewModel {
    pub fn new(collection: Option<&Collection>) -> Self {
        let vm = Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            slug: RwSignal::new(String::new()),
            icon: RwSignal::new(EMOJI_CHOICES[0].to_string()),
            description: RwSignal::new(String::new()),
            is_public: RwSignal::new(true),
            fields: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        };
        if let Some(c) = collection {
            vm.id.set(Some(c.id));
            vm.name.set(c.name.clone());
            vm.slug.set(c.slug.clone());
            vm.icon.set(c.icon_or_default().to_string());
            vm.description.set(c.description.clone().unwrap_or_default());
            vm.is_public.set(c.is_public);
            vm.fields.set(c.fields().to_vec());
        }
        vm
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_untracked(|id| id.is_some())
    }

    pub fn to_dto(&self) -> CollectionDto {
        CollectionDto::new(
            &self.name.get_untracked(),
            &self.slug.get_untracked(),
            &self.icon.get_untracked(),
            &self.description.get_untracked(),
            self.is_public.get_untracked(),
            self.fields.get_untracked(),
        )
    }

    /// Create or update; `on_saved` runs only after the API accepted the body
    pub fn save(&self, session: Session, on_saved: Callback<Collection>) {
        let dto = self.to_dto();
        if let Err(e) = dto.validate() {
            self.error.set(Some(e));
            return;
        }
        self.error.set(None);
        self.is_saving.set(true);

        let id = self.id.get_untracked();
        let is_saving = self.is_saving;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_collection(&session, id, &dto).await,
                None => api::create_collection(&session, &dto).await,
            };
            is_saving.set(false);
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) => alert(&e),
            }
        });
    }
}
