// src/application/commands/slugs/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            time::Clock,
            util::{self, SlugGenerator},
        },
    },
    domain::translation::{
        ConflictRanker, Locale, NewTranslation, RecordId, Slug, SluggableRecordWriteStore,
        TranslatableSlugStore, Translation,
    },
};

pub struct SlugCommandService {
    pub(super) write_store: Arc<dyn SluggableRecordWriteStore>,
    pub(super) read_store: Arc<dyn TranslatableSlugStore>,
    pub(super) ranker: Arc<ConflictRanker>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SlugCommandService {
    pub fn new(
        write_store: Arc<dyn SluggableRecordWriteStore>,
        read_store: Arc<dyn TranslatableSlugStore>,
        ranker: Arc<ConflictRanker>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_store,
            read_store,
            ranker,
            slugger,
            clock,
        }
    }

    pub(super) fn base_slug(&self, text: &str, record_id: RecordId) -> ApplicationResult<Slug> {
        util::base_slug(self.slugger.as_ref(), text, Some(record_id))
    }

    /// Ranks and stores a slug for `record_id` in `locale`. A uniqueness
    /// violation on write means another writer took the slug between ranking
    /// and persisting; the ranking is recomputed and the write retried once.
    pub(super) async fn assign_slug(
        &self,
        record_id: RecordId,
        locale: &Locale,
        base: &Slug,
        exclude: Option<RecordId>,
    ) -> ApplicationResult<Translation> {
        let mut retried = false;

        loop {
            let slug = self.ranker.next_available_slug(base, locale, exclude).await?;
            let translation = NewTranslation {
                record_id,
                locale: locale.clone(),
                slug,
                at: self.clock.now(),
            };

            match self.write_store.upsert_translation(translation).await {
                Ok(saved) => {
                    tracing::info!(record_id = %record_id, locale = %locale, slug = %saved.slug, "slug assigned");
                    return Ok(saved);
                }
                Err(err) if err.is_retryable() && !retried => {
                    tracing::warn!(record_id = %record_id, locale = %locale, error = %err, "slug taken concurrently, re-ranking");
                    retried = true;
                }
                Err(err) if err.is_retryable() => {
                    return Err(ApplicationError::conflict(format!(
                        "could not reserve a slug for {base} in {locale}"
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
