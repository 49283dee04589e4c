//! Extraction server HTTP handlers.

mod docs;
mod extract;
mod health;

pub use docs::{docs_handler, not_found_handler};
pub use extract::extract_handler;
pub use health::health_handler;
