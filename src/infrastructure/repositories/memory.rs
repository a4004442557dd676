use super::{conflict_order, sort_by_locale_preference};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::translation::{
    Locale, NewTranslation, RecordId, Slug, SlugSeparator, SluggableRecordWriteStore,
    TranslatableSlugStore, Translation, TranslationOrder,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local translation store. Enforces the same constraints as the SQL
/// schema: one translation per `(record, locale)` and unique `(locale, slug)`.
#[derive(Default)]
pub struct InMemoryTranslationStore {
    inner: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    records: BTreeMap<RecordId, BTreeMap<Locale, Translation>>,
}

impl MemoryState {
    fn translations(&self) -> impl Iterator<Item = &Translation> {
        self.records.values().flat_map(|by_locale| by_locale.values())
    }
}

impl InMemoryTranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, MemoryState>> {
        self.inner
            .read()
            .map_err(|_| DomainError::Persistence("translation store lock poisoned".into()))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, MemoryState>> {
        self.inner
            .write()
            .map_err(|_| DomainError::Persistence("translation store lock poisoned".into()))
    }
}

#[async_trait]
impl TranslatableSlugStore for InMemoryTranslationStore {
    async fn find_translation(
        &self,
        locale: &Locale,
        slug: &Slug,
    ) -> DomainResult<Option<Translation>> {
        let state = self.read()?;
        Ok(state
            .translations()
            .find(|t| &t.locale == locale && &t.slug == slug)
            .cloned())
    }

    async fn find_translations(
        &self,
        locales: &[Locale],
        slug: &Slug,
        order: TranslationOrder,
    ) -> DomainResult<Vec<Translation>> {
        let state = self.read()?;
        let mut matches: Vec<Translation> = state
            .translations()
            .filter(|t| &t.slug == slug && locales.contains(&t.locale))
            .cloned()
            .collect();

        match order {
            TranslationOrder::LocalePreference => sort_by_locale_preference(&mut matches, locales),
        }
        Ok(matches)
    }

    async fn find_translations_by_prefix(
        &self,
        locale: &Locale,
        base: &Slug,
        separator: &SlugSeparator,
        exclude: Option<RecordId>,
    ) -> DomainResult<Vec<Translation>> {
        let prefix = format!("{}{}", base.as_str(), separator.as_str());
        let state = self.read()?;
        let mut matches: Vec<Translation> = state
            .translations()
            .filter(|t| &t.locale == locale)
            .filter(|t| Some(t.record_id) != exclude)
            .filter(|t| &t.slug == base || t.slug.as_str().starts_with(&prefix))
            .cloned()
            .collect();

        matches.sort_by(conflict_order);
        Ok(matches)
    }

    async fn load_all_translations(&self, record_id: RecordId) -> DomainResult<Vec<Translation>> {
        let state = self.read()?;
        Ok(state
            .records
            .get(&record_id)
            .map(|by_locale| by_locale.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn record_exists(&self, record_id: RecordId) -> DomainResult<bool> {
        Ok(self.read()?.records.contains_key(&record_id))
    }
}

#[async_trait]
impl SluggableRecordWriteStore for InMemoryTranslationStore {
    async fn insert_record(&self) -> DomainResult<RecordId> {
        let mut state = self.write()?;
        state.last_id += 1;
        let id = RecordId::new(state.last_id)?;
        state.records.insert(id, BTreeMap::new());
        Ok(id)
    }

    async fn upsert_translation(&self, translation: NewTranslation) -> DomainResult<Translation> {
        let NewTranslation {
            record_id,
            locale,
            slug,
            at,
        } = translation;

        let mut state = self.write()?;
        if !state.records.contains_key(&record_id) {
            return Err(DomainError::NotFound("record not found".into()));
        }

        let taken = state
            .translations()
            .any(|t| t.locale == locale && t.slug == slug && t.record_id != record_id);
        if taken {
            return Err(DomainError::RetryableConflict(format!(
                "slug {slug} already taken in {locale}"
            )));
        }

        let by_locale = state
            .records
            .get_mut(&record_id)
            .ok_or_else(|| DomainError::NotFound("record not found".into()))?;

        let saved = match by_locale.get_mut(&locale) {
            Some(existing) => {
                existing.slug = slug;
                existing.updated_at = at;
                existing.clone()
            }
            None => {
                let created = Translation {
                    record_id,
                    locale: locale.clone(),
                    slug,
                    created_at: at,
                    updated_at: at,
                };
                by_locale.insert(locale, created.clone());
                created
            }
        };
        Ok(saved)
    }

    async fn delete_record(&self, record_id: RecordId) -> DomainResult<()> {
        let mut state = self.write()?;
        state
            .records
            .remove(&record_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("record not found".into()))
    }
}
