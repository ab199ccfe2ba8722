use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

/// Optional static mapping from logical printer names used in job
/// descriptors to physical printer identifiers.
#[derive(Debug, Clone, Default)]
pub struct PrinterAliasMap {
    aliases: HashMap<String, String>,
}

impl PrinterAliasMap {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }

    /// Loads the alias file. An absent file is an empty map, not an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let aliases: HashMap<String, String> = serde_json::from_str(&content)?;

        Ok(Self { aliases })
    }

    /// Resolves a logical name to a physical one. A map entry takes
    /// precedence; otherwise the alias is used literally.
    pub fn resolve(&self, alias: &str) -> String {
        self.aliases
            .get(alias)
            .cloned()
            .unwrap_or_else(|| alias.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
