use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::PrintError;

/// Output sink for rendered documents: reports the live printer list and
/// submits documents for printing.
pub trait PrintSpooler: Send + Sync {
    /// Names of the printers currently known to the print system.
    fn available_printers(&self) -> Result<Vec<String>, PrintError>;

    /// Submits a document. `printer: None` targets the system default.
    fn submit(&self, document: &Path, printer: Option<&str>) -> Result<(), PrintError>;
}

/// CUPS-backed spooler shelling out to `lp` and `lpstat`.
pub struct CupsSpooler {
    lp: PathBuf,
    lpstat: PathBuf,
}

impl CupsSpooler {
    pub fn new() -> Self {
        Self {
            lp: PathBuf::from("lp"),
            lpstat: PathBuf::from("lpstat"),
        }
    }

    /// Override the `lp`/`lpstat` program paths.
    pub fn with_programs<P: AsRef<Path>>(lp: P, lpstat: P) -> Self {
        Self {
            lp: lp.as_ref().to_path_buf(),
            lpstat: lpstat.as_ref().to_path_buf(),
        }
    }
}

impl Default for CupsSpooler {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintSpooler for CupsSpooler {
    fn available_printers(&self) -> Result<Vec<String>, PrintError> {
        let result = Command::new(&self.lpstat)
            .arg("-e")
            .output()
            .map_err(|e| PrintError::Spawn {
                program: self.lpstat.display().to_string(),
                source: e,
            })?;

        if !result.status.success() {
            return Err(PrintError::List {
                detail: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&result.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn submit(&self, document: &Path, printer: Option<&str>) -> Result<(), PrintError> {
        let mut command = Command::new(&self.lp);
        if let Some(printer) = printer {
            command.args(["-d", printer]);
        }
        command.arg(document);

        debug!("Submitting print job: {:?}", command);

        let result = command.output().map_err(|e| PrintError::Spawn {
            program: self.lp.display().to_string(),
            source: e,
        })?;

        if !result.status.success() {
            return Err(PrintError::Submit {
                printer: printer.map(String::from),
                detail: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
