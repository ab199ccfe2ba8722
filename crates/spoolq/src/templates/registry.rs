use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Template selector applied when a job descriptor omits the `template` field.
pub const DEFAULT_TEMPLATE: &str = "receipt";

/// One entry of the template registry: where the template lives and how its
/// pages are laid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    /// Template file, relative to the template directory.
    pub file: String,
    /// Named page format (e.g. "A4"). Takes precedence over `width`.
    #[serde(default)]
    pub format: Option<String>,
    /// Explicit page width (e.g. "80mm"). Height is never set, so content
    /// determines page length.
    #[serde(default)]
    pub width: Option<String>,
}

/// Page layout handed to the renderer. The format/width conflict is resolved
/// here so it cannot survive past template resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLayout {
    Format(String),
    Width(String),
    Auto,
}

impl TemplateDescriptor {
    pub fn page_layout(&self) -> PageLayout {
        match (&self.format, &self.width) {
            (Some(format), _) => PageLayout::Format(format.clone()),
            (None, Some(width)) => PageLayout::Width(width.clone()),
            (None, None) => PageLayout::Auto,
        }
    }
}

/// Static mapping from template selector to descriptor, loaded once at
/// startup and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    template_directory: PathBuf,
    templates: HashMap<String, TemplateDescriptor>,
}

impl TemplateRegistry {
    pub fn new<P: AsRef<Path>>(
        template_directory: P,
        templates: HashMap<String, TemplateDescriptor>,
    ) -> Self {
        Self {
            template_directory: template_directory.as_ref().to_path_buf(),
            templates,
        }
    }

    /// Loads the registry file (a JSON object keyed by selector).
    pub fn load(
        registry_path: impl AsRef<Path>,
        template_directory: impl AsRef<Path>,
    ) -> Result<Self, TemplateError> {
        let registry_path = registry_path.as_ref();
        let content =
            std::fs::read_to_string(registry_path).map_err(|e| TemplateError::ReadRegistry {
                path: registry_path.to_path_buf(),
                source: e,
            })?;

        let templates: HashMap<String, TemplateDescriptor> = serde_json::from_str(&content)?;

        Ok(Self::new(
            template_directory.as_ref(),
            templates,
        ))
    }

    pub fn template_directory(&self) -> &Path {
        &self.template_directory
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks a selector up, or fails with `UnknownTemplate`.
    pub fn resolve(&self, selector: &str) -> Result<&TemplateDescriptor, TemplateError> {
        self.templates
            .get(selector)
            .ok_or_else(|| TemplateError::UnknownTemplate(selector.to_string()))
    }

    /// Reads the template file referenced by a descriptor.
    pub fn load_source(&self, descriptor: &TemplateDescriptor) -> Result<String, TemplateError> {
        let path = self.template_directory.join(&descriptor.file);
        std::fs::read_to_string(&path).map_err(|e| TemplateError::ReadTemplate { path, source: e })
    }
}
