use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;

use crate::templates::DEFAULT_TEMPLATE;

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_true() -> bool {
    true
}

/// One unit of work, as dropped into the queue directory. Known fields are
/// typed; everything else lands in the open payload map and is passed
/// through to the template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptor {
    #[serde(default = "default_template")]
    pub template: String,

    /// Caller-supplied document identity.
    #[serde(default)]
    pub invoice_no: Option<String>,

    #[serde(default = "default_true")]
    pub print: bool,

    #[serde(default, alias = "savePDF")]
    pub save_artifact: bool,

    /// Logical printer alias; resolved through the alias map.
    #[serde(default)]
    pub printer_name: Option<String>,

    /// Per-job render engine override.
    #[serde(default)]
    pub engine_path: Option<PathBuf>,

    /// Template-specific payload, passed to the renderer untouched.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

impl JobDescriptor {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The document identity: caller-supplied, or a generated unique
    /// fallback assigned at ingestion time.
    pub fn identity(&self) -> String {
        self.invoice_no
            .clone()
            .unwrap_or_else(|| format!("unknown-{}", uuid::Uuid::new_v4()))
    }

    /// Builds the record handed to the renderer: the payload with the
    /// resolved identity and generation timestamp merged in.
    pub fn render_context(&self, identity: &str, generated_at: DateTime<Local>) -> Value {
        let mut map = self.payload.clone();
        map.insert(
            "template".to_string(),
            Value::String(self.template.clone()),
        );
        map.insert("invoiceNo".to_string(), Value::String(identity.to_string()));
        map.insert(
            "generatedAt".to_string(),
            Value::String(generated_at.to_rfc3339()),
        );
        Value::Object(map)
    }
}
