//! Locale-aware slug lookup for translated records.
//!
//! A record owns one translation per locale and every translation carries a
//! slug that is unique within its locale. [`domain::translation::SlugResolver`]
//! maps a slug back to its record (current locale first, then the default
//! locale) and [`domain::translation::ConflictRanker`] picks the next free
//! `slug--N` variant when a slug is already taken.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
