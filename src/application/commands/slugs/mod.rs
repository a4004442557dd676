// src/application/commands/slugs/mod.rs
mod create;
mod delete;
mod service;
mod set_slug;

pub use create::{CreateRecordCommand, CreateRecordCommandBuilder};
pub use delete::DeleteRecordCommand;
pub use service::SlugCommandService;
pub use set_slug::SetSlugCommand;
