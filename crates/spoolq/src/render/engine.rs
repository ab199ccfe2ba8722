use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use handlebars::Handlebars;
use log::debug;

use crate::error::RenderError;
use crate::templates::PageLayout;

use super::{expand_template, DocumentRenderer, RenderRequest};

/// Renderer that expands the template to HTML and hands it to an external
/// conversion engine (wkhtmltopdf-compatible CLI) to produce a paginated PDF.
pub struct EngineRenderer {
    registry: Handlebars<'static>,
    program: PathBuf,
}

impl EngineRenderer {
    pub fn new<P: AsRef<Path>>(program: P) -> Self {
        Self {
            registry: Handlebars::new(),
            program: program.as_ref().to_path_buf(),
        }
    }

    fn layout_args(layout: &PageLayout) -> Vec<String> {
        match layout {
            PageLayout::Format(format) => vec!["--page-size".to_string(), format.clone()],
            // Height is deliberately omitted so content drives page length.
            PageLayout::Width(width) => vec!["--page-width".to_string(), width.clone()],
            PageLayout::Auto => vec![],
        }
    }
}

impl DocumentRenderer for EngineRenderer {
    fn extension(&self) -> &str {
        "pdf"
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, RenderError> {
        let html = expand_template(&self.registry, request.template, request.context)?;

        let mut input = tempfile::Builder::new()
            .prefix("spoolq-render-")
            .suffix(".html")
            .tempfile()?;
        input.write_all(html.as_bytes())?;
        input.flush()?;

        let output = tempfile::Builder::new()
            .prefix("spoolq-render-")
            .suffix(".pdf")
            .tempfile()?;

        let program = request.engine_override.unwrap_or(&self.program);
        let mut command = Command::new(program);
        command.arg("--quiet");
        command.args(Self::layout_args(request.layout));
        command.arg(input.path()).arg(output.path());

        debug!("Launching render engine: {:?}", command);

        let result = command.output().map_err(|e| RenderError::EngineLaunch {
            program: program.to_path_buf(),
            source: e,
        })?;

        if !result.status.success() {
            return Err(RenderError::EngineFailed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(std::fs::read(output.path())?)
    }
}
