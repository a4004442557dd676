// src/domain/translation/services/mod.rs
mod ranker;
mod resolver;

pub use ranker::{ConflictRanker, rank_next_slug};
pub use resolver::{LocaleContext, Resolution, ResolutionState, SlugResolver};
