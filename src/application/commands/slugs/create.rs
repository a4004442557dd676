// src/application/commands/slugs/create.rs
use std::collections::BTreeMap;

use super::SlugCommandService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::translation::{Locale, SluggableRecord},
};

/// Creates a record with one slug per locale, each derived from the given
/// text (usually the title in that locale).
pub struct CreateRecordCommand {
    pub titles: BTreeMap<String, String>,
}

impl CreateRecordCommand {
    pub fn builder() -> CreateRecordCommandBuilder {
        CreateRecordCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateRecordCommandBuilder {
    titles: BTreeMap<String, String>,
}

impl CreateRecordCommandBuilder {
    pub fn title(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.titles.insert(locale.into(), text.into());
        self
    }

    pub fn build(self) -> Result<CreateRecordCommand, &'static str> {
        if self.titles.is_empty() {
            return Err("at least one title is required");
        }
        Ok(CreateRecordCommand {
            titles: self.titles,
        })
    }
}

impl SlugCommandService {
    pub async fn create_record(&self, command: CreateRecordCommand) -> ApplicationResult<RecordDto> {
        if command.titles.is_empty() {
            return Err(ApplicationError::validation("at least one title is required"));
        }

        let titles = command
            .titles
            .into_iter()
            .map(|(locale, text)| -> ApplicationResult<(Locale, String)> {
                Ok((Locale::new(locale)?, text))
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        let record_id = self.write_store.insert_record().await?;

        let mut translations = Vec::with_capacity(titles.len());
        for (locale, text) in &titles {
            let assigned = match self.base_slug(text, record_id) {
                Ok(base) => self.assign_slug(record_id, locale, &base, None).await,
                Err(err) => Err(err),
            };

            match assigned {
                Ok(translation) => translations.push(translation),
                Err(err) => {
                    if let Err(cleanup) = self.write_store.delete_record(record_id).await {
                        tracing::warn!(record_id = %record_id, error = %cleanup, "failed to roll back partially created record");
                    }
                    return Err(err);
                }
            }
        }

        Ok(SluggableRecord::new(record_id, translations).into())
    }
}
