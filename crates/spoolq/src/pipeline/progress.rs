use std::sync::Arc;

use tokio::sync::broadcast;

use crate::broadcast::job_events::{JobEvent, JobEventTracker, JobStage};

/// Events emitted by the pipeline during processing.
pub enum ProgressEvent {
    Stage {
        stage: JobStage,
        message: String,
    },
    Completed {
        printed: bool,
        output_path: Option<String>,
    },
    Failed {
        error: String,
    },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Bridges pipeline events onto the job event broadcast channel.
pub struct BroadcastProgress {
    tracker: JobEventTracker,
}

impl BroadcastProgress {
    pub fn new(job_id: &str, filename: &str, sender: Arc<broadcast::Sender<JobEvent>>) -> Self {
        Self {
            tracker: JobEventTracker::new(job_id, filename, sender),
        }
    }
}

impl ProgressReporter for BroadcastProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Stage { stage, message } => {
                self.tracker.update_stage(stage, &message);
            }
            ProgressEvent::Completed {
                printed,
                output_path,
            } => {
                self.tracker.completed(printed, output_path.as_deref());
            }
            ProgressEvent::Failed { error } => {
                self.tracker.failed(&error);
            }
        }
    }
}
