use super::row::{TranslationRow, into_translations};
use super::{map_sqlx, numbered_variant_pattern, sort_by_locale_preference};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::translation::{
    Locale, NewTranslation, RecordId, Slug, SlugSeparator, SluggableRecordWriteStore,
    TranslatableSlugStore, Translation, TranslationOrder,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTranslationStore {
    pool: PgPool,
}

impl PostgresTranslationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranslatableSlugStore for PostgresTranslationStore {
    async fn find_translation(
        &self,
        locale: &Locale,
        slug: &Slug,
    ) -> DomainResult<Option<Translation>> {
        let row = sqlx::query_as::<_, TranslationRow>(
            "SELECT record_id, locale, slug, created_at, updated_at FROM slug_translations WHERE locale = $1 AND slug = $2 LIMIT 1",
        )
        .bind(locale.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Translation::try_from).transpose()
    }

    async fn find_translations(
        &self,
        locales: &[Locale],
        slug: &Slug,
        order: TranslationOrder,
    ) -> DomainResult<Vec<Translation>> {
        if locales.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT record_id, locale, slug, created_at, updated_at FROM slug_translations WHERE slug = ",
        );
        builder.push_bind(slug.as_str());
        builder.push(" AND locale IN (");
        let mut separated = builder.separated(", ");
        for locale in locales {
            separated.push_bind(locale.as_str());
        }
        separated.push_unseparated(") ORDER BY record_id ASC");

        let rows = builder
            .build_query_as::<TranslationRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut translations = into_translations(rows)?;
        match order {
            TranslationOrder::LocalePreference => {
                sort_by_locale_preference(&mut translations, locales)
            }
        }
        Ok(translations)
    }

    async fn find_translations_by_prefix(
        &self,
        locale: &Locale,
        base: &Slug,
        separator: &SlugSeparator,
        exclude: Option<RecordId>,
    ) -> DomainResult<Vec<Translation>> {
        let pattern = numbered_variant_pattern(base, separator);

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT record_id, locale, slug, created_at, updated_at FROM slug_translations WHERE locale = ",
        );
        builder.push_bind(locale.as_str());
        builder.push(" AND (slug = ");
        builder.push_bind(base.as_str());
        builder.push(" OR slug LIKE ");
        builder.push_bind(pattern);
        builder.push(r" ESCAPE '\')");
        if let Some(record_id) = exclude {
            builder.push(" AND record_id <> ");
            builder.push_bind(i64::from(record_id));
        }
        builder.push(" ORDER BY char_length(slug) DESC, slug DESC");

        let rows = builder
            .build_query_as::<TranslationRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_translations(rows)
    }

    async fn load_all_translations(&self, record_id: RecordId) -> DomainResult<Vec<Translation>> {
        let rows = sqlx::query_as::<_, TranslationRow>(
            "SELECT record_id, locale, slug, created_at, updated_at FROM slug_translations WHERE record_id = $1 ORDER BY locale ASC",
        )
        .bind(i64::from(record_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_translations(rows)
    }

    async fn record_exists(&self, record_id: RecordId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM sluggable_records WHERE id = $1)")
            .bind(i64::from(record_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl SluggableRecordWriteStore for PostgresTranslationStore {
    async fn insert_record(&self) -> DomainResult<RecordId> {
        let id: i64 = sqlx::query_scalar("INSERT INTO sluggable_records DEFAULT VALUES RETURNING id")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        RecordId::new(id)
    }

    async fn upsert_translation(&self, translation: NewTranslation) -> DomainResult<Translation> {
        let NewTranslation {
            record_id,
            locale,
            slug,
            at,
        } = translation;

        let row = sqlx::query_as::<_, TranslationRow>(
            "INSERT INTO slug_translations (record_id, locale, slug, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (record_id, locale) DO UPDATE SET slug = EXCLUDED.slug, updated_at = EXCLUDED.updated_at
             RETURNING record_id, locale, slug, created_at, updated_at",
        )
        .bind(i64::from(record_id))
        .bind(locale.as_str())
        .bind(slug.as_str())
        .bind(at)
        .bind(at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Translation::try_from(row)
    }

    async fn delete_record(&self, record_id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM sluggable_records WHERE id = $1")
            .bind(i64::from(record_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("record not found".into()));
        }
        Ok(())
    }
}
