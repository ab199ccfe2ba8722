use std::path::{Path, PathBuf};

use crate::config::schema::AgentConfig;
use crate::error::SpoolqError;
use crate::printing::PrinterAliasMap;
use crate::templates::TemplateRegistry;

/// Everything a pipeline run needs, constructed once at startup and shared
/// read-only between workers. No ambient lookups happen inside the pipeline.
pub struct PipelineConfig {
    pub queue_directory: PathBuf,
    pub output_directory: PathBuf,
    pub templates: TemplateRegistry,
    pub printer_aliases: PrinterAliasMap,
}

impl PipelineConfig {
    /// Resolves the agent config against its base directory and loads the
    /// static registries.
    pub fn from_config(config: &AgentConfig, base: &Path) -> Result<Self, SpoolqError> {
        let template_directory = resolve_relative(base, &config.template_directory);
        let templates = TemplateRegistry::load(
            resolve_relative(base, &config.template_config),
            template_directory,
        )?;

        let printer_aliases = match &config.printer_map {
            Some(path) => PrinterAliasMap::load(resolve_relative(base, path))?,
            None => PrinterAliasMap::default(),
        };

        Ok(Self {
            queue_directory: resolve_relative(base, &config.queue_directory),
            output_directory: resolve_relative(base, &config.output_directory),
            templates,
            printer_aliases,
        })
    }
}

/// Interprets a config path relative to the config file's directory.
pub fn resolve_relative(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
