use serde::{Deserialize, Serialize};

/// Top-level agent configuration, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub version: String,
    /// Directory watched for job descriptor files.
    pub queue_directory: String,
    /// Directory finalized artifacts are written to.
    pub output_directory: String,
    /// Directory template files are read from.
    pub template_directory: String,
    /// Template registry file (selector -> descriptor).
    #[serde(default = "default_template_config")]
    pub template_config: String,
    /// Printer alias map file. Absent file means an empty map.
    #[serde(default)]
    pub printer_map: Option<String>,
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,
    #[serde(default)]
    pub renderer: RendererConfig,
}

fn default_template_config() -> String {
    "template-config.json".to_string()
}

fn default_worker_count() -> usize {
    num_cpus::get()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// External conversion engine program.
    #[serde(default = "default_engine")]
    pub engine: String,
}

fn default_engine() -> String {
    "wkhtmltopdf".to_string()
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
        }
    }
}
