// src/application/commands/slugs/set_slug.rs
use super::SlugCommandService;
use crate::{
    application::{
        dto::TranslationDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::translation::{Locale, RecordId},
};

/// Replaces (or adds) the slug of an existing record in one locale.
pub struct SetSlugCommand {
    pub record_id: i64,
    pub locale: String,
    pub text: String,
}

impl SlugCommandService {
    pub async fn set_slug(&self, command: SetSlugCommand) -> ApplicationResult<TranslationDto> {
        let record_id = RecordId::new(command.record_id)?;
        let locale = Locale::new(command.locale)?;

        if !self.read_store.record_exists(record_id).await? {
            return Err(ApplicationError::not_found("record not found"));
        }

        let base = self.base_slug(&command.text, record_id)?;
        let saved = self
            .assign_slug(record_id, &locale, &base, Some(record_id))
            .await?;

        Ok(saved.into())
    }
}
