//! Preview rendering of embedding source fields.

use tracing::debug;

use embedfield_store::EmbeddingFieldConfig;

use crate::escape::escape_html;
use crate::record::SourceRecord;

/// Render a debug preview of the source fields that fed an embedding.
///
/// For each configured field name, in order: fields missing from the record
/// are skipped silently (the configured list may reference fields that do
/// not exist on every record variant), and a present field with no value
/// renders as an empty string. Values are HTML-escaped and emitted as
/// `<strong>name:</strong> value` lines joined with `<br>`, wrapped in a
/// `<div class="embedding-preview">` container.
pub fn render_preview(record: &dyn SourceRecord, source_fields: &[String]) -> String {
    let mut parts = Vec::with_capacity(source_fields.len());

    for name in source_fields {
        if !record.has_field(name) {
            debug!("Skipping source field not present on record: {name}");
            continue;
        }
        let value = record.field_value(name).unwrap_or_default();
        parts.push(format!("<strong>{name}:</strong> {}", escape_html(&value)));
    }

    format!(
        "<div class=\"embedding-preview\">{}</div>",
        parts.join("<br>")
    )
}

/// Render a preview using the source fields configured on the field.
pub fn render_for_config(record: &dyn SourceRecord, config: &EmbeddingFieldConfig) -> String {
    render_preview(record, &config.source_fields)
}
