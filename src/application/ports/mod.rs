// src/application/ports/mod.rs
pub mod time;
pub mod util;
