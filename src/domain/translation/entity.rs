// src/domain/translation/entity.rs
use crate::domain::translation::value_objects::{Locale, RecordId, Slug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub record_id: RecordId,
    pub locale: Locale,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record together with every translation it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SluggableRecord {
    pub id: RecordId,
    pub translations: Vec<Translation>,
}

impl SluggableRecord {
    pub fn new(id: RecordId, translations: Vec<Translation>) -> Self {
        Self { id, translations }
    }

    pub fn translation(&self, locale: &Locale) -> Option<&Translation> {
        self.translations.iter().find(|t| &t.locale == locale)
    }

    pub fn slug_for(&self, locale: &Locale) -> Option<&Slug> {
        self.translation(locale).map(|t| &t.slug)
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.translations.iter().map(|t| &t.locale)
    }
}

/// Write model for inserting or replacing the translation of a record in one
/// locale. Stores keep at most one translation per `(record_id, locale)`.
#[derive(Debug, Clone)]
pub struct NewTranslation {
    pub record_id: RecordId,
    pub locale: Locale,
    pub slug: Slug,
    pub at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn translation(locale: &str, slug: &str) -> Translation {
        let now = Utc::now();
        Translation {
            record_id: RecordId::new(1).unwrap(),
            locale: Locale::new(locale).unwrap(),
            slug: Slug::new(slug).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn slug_for_picks_matching_locale() {
        let record = SluggableRecord::new(
            RecordId::new(1).unwrap(),
            vec![translation("en", "a-title"), translation("de", "titel")],
        );

        let de = Locale::new("de").unwrap();
        let fr = Locale::new("fr").unwrap();
        assert_eq!(record.slug_for(&de).unwrap().as_str(), "titel");
        assert!(record.slug_for(&fr).is_none());
        assert_eq!(record.locales().count(), 2);
    }
}
