use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::util::SlugGenerator},
    domain::translation::{ConflictRanker, Locale, LocaleContext, SlugResolver, TranslatableSlugStore},
};

pub struct SlugQueryService {
    pub(super) read_store: Arc<dyn TranslatableSlugStore>,
    pub(super) resolver: Arc<SlugResolver>,
    pub(super) ranker: Arc<ConflictRanker>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) default_locale: Locale,
}

impl SlugQueryService {
    pub fn new(
        read_store: Arc<dyn TranslatableSlugStore>,
        resolver: Arc<SlugResolver>,
        ranker: Arc<ConflictRanker>,
        slugger: Arc<dyn SlugGenerator>,
        default_locale: Locale,
    ) -> Self {
        Self {
            read_store,
            resolver,
            ranker,
            slugger,
            default_locale,
        }
    }

    /// Locale context for a request; a missing locale means the default one.
    pub(super) fn locale_context(&self, requested: Option<String>) -> ApplicationResult<LocaleContext> {
        let context = match requested {
            Some(locale) => LocaleContext::new(Locale::new(locale)?, self.default_locale.clone()),
            None => LocaleContext::default_only(self.default_locale.clone()),
        };
        Ok(context)
    }
}
