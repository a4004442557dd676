use super::SlugQueryService;
use crate::{
    application::{
        dto::{RecordDto, ResolutionStateDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::translation::{RecordId, SluggableRecord},
};

pub struct FindBySlugQuery {
    pub slug: String,
    pub locale: Option<String>,
}

impl SlugQueryService {
    /// Looks a record up by slug in the requested locale, then the default
    /// locale, and finally treats a numeric candidate as a primary key.
    pub async fn find_by_slug(&self, query: FindBySlugQuery) -> ApplicationResult<RecordDto> {
        let locales = self.locale_context(query.locale)?;
        let resolution = self.resolver.resolve(&query.slug, &locales).await?;

        if let Some(record) = resolution.record {
            return Ok(RecordDto::with_match(
                record,
                ResolutionStateDto::from_state(resolution.state),
            ));
        }

        if let Some(record) = self.find_by_primary_key(&query.slug).await? {
            return Ok(RecordDto::with_match(
                record,
                Some(ResolutionStateDto::PrimaryKey),
            ));
        }

        Err(ApplicationError::not_found("record not found"))
    }

    async fn find_by_primary_key(&self, candidate: &str) -> ApplicationResult<Option<SluggableRecord>> {
        let Some(id) = candidate
            .parse::<i64>()
            .ok()
            .and_then(|id| RecordId::new(id).ok())
        else {
            return Ok(None);
        };

        if !self.read_store.record_exists(id).await? {
            return Ok(None);
        }

        let translations = self.read_store.load_all_translations(id).await?;
        Ok(Some(SluggableRecord::new(id, translations)))
    }
}
