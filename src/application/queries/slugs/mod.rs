// src/application/queries/slugs/mod.rs
mod find_by_slug;
mod next_slug;
mod service;

pub use find_by_slug::FindBySlugQuery;
pub use next_slug::NextSlugQuery;
pub use service::SlugQueryService;
