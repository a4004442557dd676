// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_translation;
mod row;
mod sqlite_translation;

pub use error::map_sqlx;
pub use memory::InMemoryTranslationStore;
pub use postgres_translation::PostgresTranslationStore;
pub use sqlite_translation::SqliteTranslationStore;

use crate::domain::translation::{Locale, Slug, SlugSeparator, Translation};
use std::cmp::Ordering;

/// Escapes `\`, `%` and `_` so `value` matches literally inside a
/// `LIKE ... ESCAPE '\'` pattern.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `base + separator + %` with the literal parts escaped.
pub fn numbered_variant_pattern(base: &Slug, separator: &SlugSeparator) -> String {
    format!(
        "{}{}%",
        escape_like(base.as_str()),
        escape_like(separator.as_str())
    )
}

/// Slug length descending, then slug descending.
pub(crate) fn conflict_order(a: &Translation, b: &Translation) -> Ordering {
    b.slug
        .as_str()
        .chars()
        .count()
        .cmp(&a.slug.as_str().chars().count())
        .then_with(|| b.slug.as_str().cmp(a.slug.as_str()))
}

/// Orders matches by the position of their locale in `locales`, then by
/// record id.
pub(crate) fn sort_by_locale_preference(translations: &mut [Translation], locales: &[Locale]) {
    let rank = |t: &Translation| {
        locales
            .iter()
            .position(|l| l == &t.locale)
            .unwrap_or(locales.len())
    };
    translations.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.record_id.cmp(&b.record_id)));
}
