use super::{IndexPage, Renderer, SeasonPage};
use anyhow::Result;

/// Writes the raw page payloads, for feeding an external template engine.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render_index(&self, page: &IndexPage) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn render_season(&self, page: &SeasonPage<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }
}
