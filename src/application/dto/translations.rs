use crate::domain::translation::{ResolutionState, SluggableRecord, Translation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a record was located by a slug lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStateDto {
    ExactLocale,
    DefaultLocale,
    PrimaryKey,
}

impl ResolutionStateDto {
    pub fn from_state(state: ResolutionState) -> Option<Self> {
        match state {
            ResolutionState::ExactLocaleHit => Some(Self::ExactLocale),
            ResolutionState::DefaultLocaleHit => Some(Self::DefaultLocale),
            ResolutionState::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationDto {
    pub record_id: i64,
    pub locale: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Translation> for TranslationDto {
    fn from(translation: Translation) -> Self {
        Self {
            record_id: translation.record_id.into(),
            locale: translation.locale.into(),
            slug: translation.slug.into_inner(),
            created_at: translation.created_at,
            updated_at: translation.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<ResolutionStateDto>,
    pub translations: Vec<TranslationDto>,
}

impl RecordDto {
    pub fn with_match(record: SluggableRecord, matched_by: Option<ResolutionStateDto>) -> Self {
        let mut dto = Self::from(record);
        dto.matched_by = matched_by;
        dto
    }

    pub fn slug_for(&self, locale: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.locale == locale)
            .map(|t| t.slug.as_str())
    }
}

impl From<SluggableRecord> for RecordDto {
    fn from(record: SluggableRecord) -> Self {
        Self {
            id: record.id.into(),
            matched_by: None,
            translations: record
                .translations
                .into_iter()
                .map(TranslationDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugDto {
    pub locale: String,
    pub slug: String,
}
