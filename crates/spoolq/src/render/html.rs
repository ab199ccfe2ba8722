use handlebars::Handlebars;

use crate::error::RenderError;

use super::{expand_template, DocumentRenderer, RenderRequest};

/// Renderer that expands the template and emits the result as-is.
///
/// Produces no pagination; page layout options are ignored. Useful when the
/// artifact is consumed by something that paginates on its own, and as the
/// deterministic renderer for tests.
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            registry: Handlebars::new(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn extension(&self) -> &str {
        "html"
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, RenderError> {
        let html = expand_template(&self.registry, request.template, request.context)?;
        Ok(html.into_bytes())
    }
}
