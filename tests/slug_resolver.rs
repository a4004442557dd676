use std::sync::Arc;

mod support;

use slugline::domain::translation::{
    LocaleContext, ResolutionState, SlugResolver, TranslatableSlugStore,
};
use slugline::infrastructure::repositories::InMemoryTranslationStore;
use support::{locale, seed_record};

fn resolver(store: &Arc<InMemoryTranslationStore>) -> SlugResolver {
    let read: Arc<dyn TranslatableSlugStore> = store.clone();
    SlugResolver::new(read)
}

fn context(current: &str, default: &str) -> LocaleContext {
    LocaleContext::new(locale(current), locale(default))
}

#[tokio::test]
async fn resolves_slug_in_current_locale() {
    let store = Arc::new(InMemoryTranslationStore::new());
    let id = seed_record(&*store, &[("en", "a-title"), ("de", "titel")]).await;

    let resolution = resolver(&store)
        .resolve("titel", &context("de", "en"))
        .await
        .unwrap();

    assert_eq!(resolution.state, ResolutionState::ExactLocaleHit);
    assert_eq!(resolution.record_id(), Some(id));
}

#[tokio::test]
async fn falls_back_to_default_locale_slug() {
    let store = Arc::new(InMemoryTranslationStore::new());
    let id = seed_record(&*store, &[("en", "only-english")]).await;

    let resolution = resolver(&store)
        .resolve("only-english", &context("de", "en"))
        .await
        .unwrap();

    assert_eq!(resolution.state, ResolutionState::DefaultLocaleHit);
    assert_eq!(resolution.record_id(), Some(id));
}

#[tokio::test]
async fn current_locale_wins_over_default_locale() {
    let store = Arc::new(InMemoryTranslationStore::new());
    let english = seed_record(&*store, &[("en", "gift")]).await;
    let german = seed_record(&*store, &[("de", "gift")]).await;

    let de = resolver(&store)
        .resolve("gift", &context("de", "en"))
        .await
        .unwrap();
    assert_eq!(de.record_id(), Some(german));
    assert_eq!(de.state, ResolutionState::ExactLocaleHit);

    let en = resolver(&store)
        .resolve("gift", &context("en", "en"))
        .await
        .unwrap();
    assert_eq!(en.record_id(), Some(english));
}

#[tokio::test]
async fn not_found_when_neither_locale_matches() {
    let store = Arc::new(InMemoryTranslationStore::new());
    seed_record(&*store, &[("fr", "bonjour"), ("en", "hello")]).await;

    let resolver = resolver(&store);
    let miss = resolver
        .resolve("bonjour", &context("de", "en"))
        .await
        .unwrap();
    assert_eq!(miss.state, ResolutionState::NotFound);
    assert!(miss.record.is_none());

    let blank = resolver.resolve("", &context("de", "en")).await.unwrap();
    assert!(!blank.is_found());
}

#[tokio::test]
async fn default_locale_context_does_not_look_elsewhere() {
    let store = Arc::new(InMemoryTranslationStore::new());
    seed_record(&*store, &[("de", "titel")]).await;

    let resolution = resolver(&store)
        .resolve("titel", &LocaleContext::default_only(locale("en")))
        .await
        .unwrap();
    assert_eq!(resolution.state, ResolutionState::NotFound);
}

#[tokio::test]
async fn resolved_record_exposes_every_translation() {
    let store = Arc::new(InMemoryTranslationStore::new());
    let id = seed_record(
        &*store,
        &[("en", "a-title"), ("de", "titel"), ("fr", "titre")],
    )
    .await;

    let resolution = resolver(&store)
        .resolve("titre", &context("fr", "en"))
        .await
        .unwrap();

    let record = resolution.record.unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.translations.len(), 3);
    assert_eq!(record.slug_for(&locale("en")).unwrap().as_str(), "a-title");
    assert_eq!(record.slug_for(&locale("de")).unwrap().as_str(), "titel");
}
