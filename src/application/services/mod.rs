// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slugs::SlugCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::slugs::SlugQueryService,
    },
    domain::translation::{
        ConflictRanker, Locale, SlugResolver, SlugSeparator, SluggableRecordWriteStore,
        TranslatableSlugStore,
    },
};

/// Settings the services need from configuration.
#[derive(Debug, Clone)]
pub struct SlugSettings {
    pub default_locale: Locale,
    pub separator: SlugSeparator,
}

pub struct ApplicationServices {
    pub slug_commands: Arc<SlugCommandService>,
    pub slug_queries: Arc<SlugQueryService>,
}

impl ApplicationServices {
    pub fn new(
        read_store: Arc<dyn TranslatableSlugStore>,
        write_store: Arc<dyn SluggableRecordWriteStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: SlugSettings,
    ) -> Self {
        let resolver = Arc::new(SlugResolver::new(Arc::clone(&read_store)));
        let ranker = Arc::new(ConflictRanker::new(
            Arc::clone(&read_store),
            settings.separator,
        ));

        let slug_commands = Arc::new(SlugCommandService::new(
            Arc::clone(&write_store),
            Arc::clone(&read_store),
            Arc::clone(&ranker),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let slug_queries = Arc::new(SlugQueryService::new(
            Arc::clone(&read_store),
            Arc::clone(&resolver),
            Arc::clone(&ranker),
            Arc::clone(&slugger),
            settings.default_locale,
        ));

        Self {
            slug_commands,
            slug_queries,
        }
    }
}
