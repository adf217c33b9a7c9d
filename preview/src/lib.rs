//! # Embedding preview
//!
//! Renders a human-readable debug summary of the source fields that fed an
//! embedding. The renderer reads the configured source fields from a record
//! through the minimal [`SourceRecord`] capability surface and produces an
//! HTML fragment; it never mutates the record and never triggers embedding
//! computation.

pub mod escape;
pub mod record;
pub mod render;

pub use escape::escape_html;
pub use record::{MapRecord, SourceRecord};
pub use render::{render_for_config, render_preview};
