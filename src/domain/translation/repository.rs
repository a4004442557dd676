use crate::domain::errors::DomainResult;
use crate::domain::translation::entity::{NewTranslation, Translation};
use crate::domain::translation::value_objects::{Locale, RecordId, Slug, SlugSeparator};
use async_trait::async_trait;

/// Sort order for [`TranslatableSlugStore::find_translations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationOrder {
    /// Matches come back in the order their locale appears in the requested
    /// locale list; ties break on record id.
    #[default]
    LocalePreference,
}

/// Read capability over the `(record id, locale) -> slug` translation table.
///
/// Backends own their SQL dialect: pattern escaping and string length
/// functions never leak past this trait.
#[async_trait]
pub trait TranslatableSlugStore: Send + Sync {
    async fn find_translation(
        &self,
        locale: &Locale,
        slug: &Slug,
    ) -> DomainResult<Option<Translation>>;

    async fn find_translations(
        &self,
        locales: &[Locale],
        slug: &Slug,
        order: TranslationOrder,
    ) -> DomainResult<Vec<Translation>>;

    /// Translations in `locale` whose slug is `base` or starts with
    /// `base + separator`, minus the one owned by `exclude`. Sorted by slug
    /// length descending, then slug descending. Backends may return variants
    /// whose suffix is not numeric; callers filter those out.
    async fn find_translations_by_prefix(
        &self,
        locale: &Locale,
        base: &Slug,
        separator: &SlugSeparator,
        exclude: Option<RecordId>,
    ) -> DomainResult<Vec<Translation>>;

    /// Every translation of the record, ordered by locale.
    async fn load_all_translations(&self, record_id: RecordId) -> DomainResult<Vec<Translation>>;

    async fn record_exists(&self, record_id: RecordId) -> DomainResult<bool>;
}

#[async_trait]
pub trait SluggableRecordWriteStore: Send + Sync {
    async fn insert_record(&self) -> DomainResult<RecordId>;

    /// Inserts or replaces the record's translation in `translation.locale`.
    /// A slug already held by another record in that locale fails with
    /// `DomainError::RetryableConflict`.
    async fn upsert_translation(&self, translation: NewTranslation) -> DomainResult<Translation>;

    /// Removes the record and, with it, all of its translations.
    async fn delete_record(&self, record_id: RecordId) -> DomainResult<()>;
}
