// src/domain/translation/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewTranslation, SluggableRecord, Translation};
pub use repository::{SluggableRecordWriteStore, TranslatableSlugStore, TranslationOrder};
pub use services::{ConflictRanker, LocaleContext, Resolution, ResolutionState, SlugResolver};
pub use value_objects::{Locale, RecordId, Slug, SlugSeparator};
