use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::translation::repository::TranslatableSlugStore;
use crate::domain::translation::value_objects::{Locale, RecordId, Slug, SlugSeparator};

/// Domain service that picks the next numbered variant of a slug within one
/// locale: the highest suffix in use plus one, never filling gaps.
pub struct ConflictRanker {
    store: Arc<dyn TranslatableSlugStore>,
    separator: SlugSeparator,
}

impl ConflictRanker {
    pub fn new(store: Arc<dyn TranslatableSlugStore>, separator: SlugSeparator) -> Self {
        Self { store, separator }
    }

    /// `exclude` is the record being updated; new records pass `None`.
    pub async fn next_available_slug(
        &self,
        base: &Slug,
        locale: &Locale,
        exclude: Option<RecordId>,
    ) -> DomainResult<Slug> {
        let conflicts = self
            .store
            .find_translations_by_prefix(locale, base, &self.separator, exclude)
            .await?;

        let next = rank_next_slug(base, &self.separator, conflicts.iter().map(|t| &t.slug))?;
        tracing::debug!(
            base = %base,
            locale = %locale,
            conflicts = conflicts.len(),
            next = %next,
            "ranked slug candidates"
        );
        Ok(next)
    }
}

/// Picks the next slug from conflicts sorted by length descending, then value
/// descending. The first canonical numeric variant in that order carries the
/// highest suffix, so one scan from the front is enough.
pub fn rank_next_slug<'a, I>(base: &Slug, separator: &SlugSeparator, conflicts: I) -> DomainResult<Slug>
where
    I: IntoIterator<Item = &'a Slug>,
{
    let mut base_taken = false;

    for slug in conflicts {
        if slug == base {
            base_taken = true;
            continue;
        }
        if let Some(highest) = numeric_suffix(base, separator, slug) {
            let next = highest.checked_add(1).ok_or_else(|| {
                DomainError::Validation(format!("slug sequence exhausted for {base}"))
            })?;
            return separator.suffixed(base, next.max(2));
        }
    }

    if base_taken {
        separator.suffixed(base, 2)
    } else {
        Ok(base.clone())
    }
}

/// Suffix of `base + separator + n` where `n` is a positive integer without
/// sign or leading zeros.
fn numeric_suffix(base: &Slug, separator: &SlugSeparator, slug: &Slug) -> Option<u64> {
    let digits = slug
        .as_str()
        .strip_prefix(base.as_str())?
        .strip_prefix(separator.as_str())?;

    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}
