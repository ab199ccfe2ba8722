pub mod engine;
pub mod html;

use std::path::Path;

use crate::error::RenderError;
use crate::templates::PageLayout;

pub use engine::EngineRenderer;
pub use html::HtmlRenderer;

/// One rendering request: template source, fully merged data record, and the
/// page layout resolved from the template descriptor.
pub struct RenderRequest<'a> {
    pub template: &'a str,
    pub context: &'a serde_json::Value,
    pub layout: &'a PageLayout,
    /// Per-job engine program override from the descriptor, if any.
    pub engine_override: Option<&'a Path>,
}

/// Turns a template plus a data record into document bytes.
///
/// The template language and the document format are the renderer's business;
/// the pipeline only moves bytes around.
pub trait DocumentRenderer: Send + Sync {
    /// File extension of the documents this renderer produces.
    fn extension(&self) -> &str;

    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, RenderError>;
}

pub(crate) fn expand_template(
    registry: &handlebars::Handlebars<'static>,
    source: &str,
    context: &serde_json::Value,
) -> Result<String, RenderError> {
    registry
        .render_template(source, context)
        .map_err(|e| RenderError::Expand(e.to_string()))
}
