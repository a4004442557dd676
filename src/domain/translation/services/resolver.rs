use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::translation::entity::{SluggableRecord, Translation};
use crate::domain::translation::repository::{TranslatableSlugStore, TranslationOrder};
use crate::domain::translation::value_objects::{Locale, RecordId, Slug};

/// Locales a single resolution runs under. Built per request and passed
/// explicitly; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    current: Locale,
    default: Locale,
}

impl LocaleContext {
    pub fn new(current: Locale, default: Locale) -> Self {
        Self { current, default }
    }

    /// Context whose current locale is the default one.
    pub fn default_only(default: Locale) -> Self {
        Self {
            current: default.clone(),
            default,
        }
    }

    pub fn current(&self) -> &Locale {
        &self.current
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    pub fn is_default(&self) -> bool {
        self.current == self.default
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    ExactLocaleHit,
    DefaultLocaleHit,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: ResolutionState,
    pub record: Option<SluggableRecord>,
}

impl Resolution {
    pub fn not_found() -> Self {
        Self {
            state: ResolutionState::NotFound,
            record: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.record.is_some()
    }

    pub fn record_id(&self) -> Option<RecordId> {
        self.record.as_ref().map(|r| r.id)
    }
}

/// Domain service that maps a slug back to its record, trying the current
/// locale first and the default locale second.
pub struct SlugResolver {
    store: Arc<dyn TranslatableSlugStore>,
}

impl SlugResolver {
    pub fn new(store: Arc<dyn TranslatableSlugStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, candidate: &str, locales: &LocaleContext) -> DomainResult<Resolution> {
        // A value that can never be a slug simply matches nothing.
        let Ok(slug) = Slug::new(candidate) else {
            return Ok(Resolution::not_found());
        };

        if let Some(hit) = self.store.find_translation(locales.current(), &slug).await? {
            tracing::debug!(slug = %slug, locale = %locales.current(), record_id = %hit.record_id, "exact locale slug hit");
            return self.complete(hit, ResolutionState::ExactLocaleHit).await;
        }

        if !locales.is_default() {
            let preferred = [locales.current().clone(), locales.default_locale().clone()];
            let hit = self
                .store
                .find_translations(&preferred, &slug, TranslationOrder::LocalePreference)
                .await?
                .into_iter()
                .next();

            if let Some(hit) = hit {
                let state = if &hit.locale == locales.current() {
                    ResolutionState::ExactLocaleHit
                } else {
                    ResolutionState::DefaultLocaleHit
                };
                tracing::debug!(slug = %slug, locale = %hit.locale, record_id = %hit.record_id, ?state, "fallback slug hit");
                return self.complete(hit, state).await;
            }
        }

        tracing::debug!(slug = %slug, current = %locales.current(), default = %locales.default_locale(), "slug not found");
        Ok(Resolution::not_found())
    }

    /// Reloads every translation of the matched record so a lookup through one
    /// locale never hides the others.
    async fn complete(&self, hit: Translation, state: ResolutionState) -> DomainResult<Resolution> {
        let record_id = hit.record_id;
        let mut translations = self.store.load_all_translations(record_id).await?;
        if !translations.iter().any(|t| t.locale == hit.locale) {
            translations.push(hit);
        }

        Ok(Resolution {
            state,
            record: Some(SluggableRecord::new(record_id, translations)),
        })
    }
}
