// src/application/ports/util.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::translation::{RecordId, Slug};

/// Turns free text ("A Title!") into a URL-safe base slug ("a-title").
/// May return an empty string when nothing usable survives normalization.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Base slug for `text`. When nothing sluggable survives, a known owner falls
/// back to `record-<id>`; without one the text is rejected.
pub fn base_slug(
    slugger: &dyn SlugGenerator,
    text: &str,
    owner: Option<RecordId>,
) -> ApplicationResult<Slug> {
    let base = slugger.slugify(text);
    if !base.is_empty() {
        return Ok(Slug::new(base)?);
    }
    match owner {
        Some(record_id) => Ok(Slug::new(format!("record-{record_id}"))?),
        None => Err(ApplicationError::validation(
            "text has no sluggable characters",
        )),
    }
}
