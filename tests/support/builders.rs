// tests/support/builders.rs
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use slugline::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::{ApplicationServices, SlugSettings},
};
use slugline::domain::translation::{
    Locale, NewTranslation, RecordId, Slug, SlugSeparator, SluggableRecordWriteStore,
    TranslatableSlugStore,
};
use slugline::infrastructure::{
    repositories::InMemoryTranslationStore, time::FixedClock, util::DefaultSlugGenerator,
};
use slugline::presentation::http::{routes::build_router, state::HttpState};

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());

pub fn locale(tag: &str) -> Locale {
    Locale::new(tag).unwrap()
}

pub fn slug(value: &str) -> Slug {
    Slug::new(value).unwrap()
}

pub fn settings(default_locale: &str) -> SlugSettings {
    SlugSettings {
        default_locale: locale(default_locale),
        separator: SlugSeparator::default(),
    }
}

pub fn services_with(
    read_store: Arc<dyn TranslatableSlugStore>,
    write_store: Arc<dyn SluggableRecordWriteStore>,
    default_locale: &str,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(*FIXED_NOW));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(read_store, write_store, clock, slugger, settings(default_locale))
}

/// Services over a fresh in-memory store, plus the store for direct seeding.
pub fn memory_services(default_locale: &str) -> (ApplicationServices, Arc<InMemoryTranslationStore>) {
    let store = Arc::new(InMemoryTranslationStore::new());
    let services = services_with(store.clone(), store.clone(), default_locale);
    (services, store)
}

pub fn make_test_router() -> axum::Router {
    let (services, _) = memory_services("en");
    build_router(HttpState {
        services: Arc::new(services),
    })
}

/// Inserts a record holding the given `(locale, slug)` pairs verbatim.
pub async fn seed_record<S>(store: &S, translations: &[(&str, &str)]) -> RecordId
where
    S: SluggableRecordWriteStore + ?Sized,
{
    let id = store.insert_record().await.unwrap();
    for (tag, value) in translations {
        store
            .upsert_translation(NewTranslation {
                record_id: id,
                locale: locale(tag),
                slug: slug(value),
                at: *FIXED_NOW,
            })
            .await
            .unwrap();
    }
    id
}
