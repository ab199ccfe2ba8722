use std::path::PathBuf;

use thiserror::Error;

use crate::error::{RenderError, StorageError, TemplateError};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read job file '{path}': {source}")]
    ReadJob {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed job descriptor: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Non-fatal problems accumulated while a job still runs to completion.
#[derive(Debug, Clone)]
pub enum PipelineWarning {
    PrintFailed {
        printer: Option<String>,
        error: String,
    },
    FinalizeFailed {
        path: PathBuf,
        error: String,
    },
    TempDiscardFailed {
        path: PathBuf,
        error: String,
    },
    SourceCleanupFailed {
        path: PathBuf,
        error: String,
    },
}
