use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpoolqError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Print error: {0}")]
    Print(#[from] PrintError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template registry '{path}': {source}")]
    ReadRegistry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template registry: {0}")]
    ParseRegistry(#[from] serde_json::Error),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Failed to read template file '{path}': {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template expansion failed: {0}")]
    Expand(String),

    #[error("Render scratch file error: {0}")]
    Scratch(#[from] std::io::Error),

    #[error("Failed to launch render engine '{program}': {source}")]
    EngineLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Render engine exited with {status}: {stderr}")]
    EngineFailed { status: String, stderr: String },
}

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Print submission failed: {detail}")]
    Submit {
        printer: Option<String>,
        detail: String,
    },

    #[error("Failed to list printers: {detail}")]
    List { detail: String },

    #[error("Printer not found: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move file from '{from}' to '{to}': {source}")]
    MoveFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove file '{path}': {source}")]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {0}")]
    FileExists(PathBuf),
}

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Worker channel closed unexpectedly")]
    ChannelClosed,

    #[error("Watch error: {0}")]
    WatchError(String),
}

pub type Result<T> = std::result::Result<T, SpoolqError>;
