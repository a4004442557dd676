pub mod translations;

pub use translations::{RecordDto, ResolutionStateDto, SlugDto, TranslationDto};
