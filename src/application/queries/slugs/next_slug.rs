use super::SlugQueryService;
use crate::{
    application::{dto::SlugDto, error::ApplicationResult, ports::util::base_slug},
    domain::translation::{Locale, RecordId},
};

/// Previews the slug `text` would receive in `locale` without storing it.
/// With `exclude` set, text without sluggable characters previews the same
/// `record-<id>` fallback that record's writes would get.
pub struct NextSlugQuery {
    pub text: String,
    pub locale: Option<String>,
    pub exclude: Option<i64>,
}

impl SlugQueryService {
    pub async fn next_slug(&self, query: NextSlugQuery) -> ApplicationResult<SlugDto> {
        let locale = match query.locale {
            Some(locale) => Locale::new(locale)?,
            None => self.default_locale.clone(),
        };
        let exclude = query.exclude.map(RecordId::new).transpose()?;

        let base = base_slug(self.slugger.as_ref(), &query.text, exclude)?;
        let slug = self.ranker.next_available_slug(&base, &locale, exclude).await?;

        Ok(SlugDto {
            locale: locale.into(),
            slug: slug.into_inner(),
        })
    }
}
