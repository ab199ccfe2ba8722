pub mod broadcast;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod printing;
pub mod render;
pub mod sanitize;
pub mod storage;
pub mod templates;
pub mod worker;

pub use broadcast::{JobEvent, JobEventBroadcaster, JobStage, JobStatus};
pub use config::{load_config, AgentConfig};
pub use error::{
    ConfigError, PrintError, RenderError, Result, SpoolqError, StorageError, TemplateError,
    WorkerError,
};
pub use pipeline::{JobContext, JobDescriptor, Pipeline, PipelineConfig};
pub use printing::{CupsSpooler, PrintSpooler, PrinterAliasMap};
pub use render::{DocumentRenderer, EngineRenderer, HtmlRenderer};
pub use templates::{TemplateRegistry, DEFAULT_TEMPLATE};
pub use worker::{Job, JobOutcome, JobResult, QueueScanner, WorkerPool};
