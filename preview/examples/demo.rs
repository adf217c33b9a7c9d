//! End-to-end demo: store an embedding, read it back, render a preview.
//!
//! Run with: `cargo run -p embedfield-preview --example demo`

use anyhow::Result;
use embedfield_preview::{MapRecord, render_for_config};
use embedfield_store::{
    EmbeddingFieldConfig, EmbeddingValue, Messenger, ProviderDefaults, ProviderRegistry,
    RegistryError, check_embedding_provider,
};
use serde_json::json;

struct StaticRegistry;

impl ProviderRegistry for StaticRegistry {
    fn default_provider(
        &self,
        _operation_type: &str,
    ) -> Result<ProviderDefaults, RegistryError> {
        Ok(ProviderDefaults::new("openai", "text-embedding-3-small"))
    }
}

struct StdoutMessenger;

impl Messenger for StdoutMessenger {
    fn warn(&self, message: &str) {
        println!("warning: {message}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = EmbeddingFieldConfig::new()
        .with_gzip(true)
        .with_source_field("title")
        .with_source_field("body");

    let check = check_embedding_provider(&StaticRegistry, &StdoutMessenger);
    println!("provider check: {check:?}");

    // An embedding produced out-of-band by the provider.
    let embedding = json!({
        "vector": [0.12, -0.05, 0.88, 0.31],
        "model": "text-embedding-3-small"
    });

    let mut value = EmbeddingValue::new();
    value.write(&embedding, &config)?;
    println!(
        "stored {} raw bytes (gzip={})",
        value.raw().map_or(0, <[u8]>::len),
        config.gzip_embedding
    );

    let decoded: Option<serde_json::Value> = value.read(&config)?;
    println!("decoded: {decoded:?}");

    let record = MapRecord::new()
        .with_field("title", "Hello <world>")
        .with_field("body", "Some article text.");
    println!("preview: {}", render_for_config(&record, &config));

    Ok(())
}
