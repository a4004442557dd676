use crate::domain::errors::DomainError;
use crate::domain::translation::{Locale, RecordId, Slug, Translation};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(super) struct TranslationRow {
    record_id: i64,
    locale: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TranslationRow> for Translation {
    type Error = DomainError;

    fn try_from(row: TranslationRow) -> Result<Self, Self::Error> {
        Ok(Translation {
            record_id: RecordId::new(row.record_id)?,
            locale: Locale::new(row.locale)?,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub(super) fn into_translations(rows: Vec<TranslationRow>) -> Result<Vec<Translation>, DomainError> {
    rows.into_iter().map(Translation::try_from).collect()
}
