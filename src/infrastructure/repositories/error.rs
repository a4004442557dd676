use crate::domain::errors::DomainError;

const CNT_TRANSLATION_LOCALE_SLUG: &str = "slug_translations_locale_slug_key";
const CNT_TRANSLATION_RECORD: &str = "slug_translations_record_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_TRANSLATION_LOCALE_SLUG => {
                        DomainError::RetryableConflict("slug already taken in locale".into())
                    }
                    CNT_TRANSLATION_RECORD => DomainError::NotFound("record not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            // SQLite does not report constraint names.
            if db_err.is_unique_violation() {
                return DomainError::RetryableConflict("unique constraint violated".into());
            }
            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
