// tests/support/stores.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use slugline::domain::errors::{DomainError, DomainResult};
use slugline::domain::translation::{
    NewTranslation, RecordId, SluggableRecordWriteStore, Translation,
};
use slugline::infrastructure::repositories::InMemoryTranslationStore;

/// Write store that lets a competing writer grab the requested slug right
/// before the first `races` upserts, so those upserts hit the uniqueness
/// constraint.
pub struct RacingWriteStore {
    inner: Arc<InMemoryTranslationStore>,
    races: AtomicUsize,
    pub attempts: AtomicUsize,
}

impl RacingWriteStore {
    pub fn new(inner: Arc<InMemoryTranslationStore>, races: usize) -> Self {
        Self {
            inner,
            races: AtomicUsize::new(races),
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SluggableRecordWriteStore for RacingWriteStore {
    async fn insert_record(&self) -> DomainResult<RecordId> {
        self.inner.insert_record().await
    }

    async fn upsert_translation(&self, translation: NewTranslation) -> DomainResult<Translation> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let pending = self.races.load(Ordering::SeqCst);
        if pending > 0 {
            self.races.store(pending - 1, Ordering::SeqCst);
            let rival = self.inner.insert_record().await?;
            self.inner
                .upsert_translation(NewTranslation {
                    record_id: rival,
                    ..translation.clone()
                })
                .await?;
        }

        self.inner.upsert_translation(translation).await
    }

    async fn delete_record(&self, record_id: RecordId) -> DomainResult<()> {
        self.inner.delete_record(record_id).await
    }
}

/// Write store whose upserts always fail with a store error.
pub struct BrokenWriteStore {
    pub inner: Arc<InMemoryTranslationStore>,
}

#[async_trait]
impl SluggableRecordWriteStore for BrokenWriteStore {
    async fn insert_record(&self) -> DomainResult<RecordId> {
        self.inner.insert_record().await
    }

    async fn upsert_translation(&self, _translation: NewTranslation) -> DomainResult<Translation> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn delete_record(&self, record_id: RecordId) -> DomainResult<()> {
        self.inner.delete_record(record_id).await
    }
}
