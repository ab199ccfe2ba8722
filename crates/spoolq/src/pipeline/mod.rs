pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod progress;
pub mod runner;

pub use config::PipelineConfig;
pub use context::JobContext;
pub use descriptor::JobDescriptor;
pub use error::{PipelineError, PipelineWarning};
pub use progress::{BroadcastProgress, NoopProgress, ProgressEvent, ProgressReporter};
pub use runner::Pipeline;
