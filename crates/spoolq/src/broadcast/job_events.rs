//! Job event broadcaster: one structured event per pipeline state transition.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Stage of job processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStage {
    Queued,
    Parsing,
    Validating,
    Rendering,
    Printing,
    Finalizing,
    Completed,
    Failed,
}

impl std::fmt::Display for JobStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStage::Queued => write!(f, "Queued"),
            JobStage::Parsing => write!(f, "Parsing"),
            JobStage::Validating => write!(f, "Validating"),
            JobStage::Rendering => write!(f, "Rendering"),
            JobStage::Printing => write!(f, "Printing"),
            JobStage::Finalizing => write!(f, "Finalizing"),
            JobStage::Completed => write!(f, "Completed"),
            JobStage::Failed => write!(f, "Failed"),
        }
    }
}

/// Status of a job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Processing,
    Completed,
    Failed,
}

/// One observable event in a job's lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEvent {
    /// Unique job identifier.
    pub job_id: String,
    /// Filename of the job descriptor being processed.
    pub filename: String,
    /// Current stage of processing.
    pub stage: JobStage,
    /// Overall job status.
    pub status: JobStatus,
    /// Human-readable message describing current activity.
    pub message: String,
    /// Timestamp of this event.
    pub timestamp: DateTime<Utc>,
    /// Whether the document was printed (set on completion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printed: Option<bool>,
    /// Final artifact path (set on completion, when saved).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Error message (set on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobEvent {
    pub fn new(job_id: &str, filename: &str, stage: JobStage, message: &str) -> Self {
        let status = match stage {
            JobStage::Completed => JobStatus::Completed,
            JobStage::Failed => JobStatus::Failed,
            _ => JobStatus::Processing,
        };

        Self {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
            stage,
            status,
            message: message.to_string(),
            timestamp: Utc::now(),
            printed: None,
            output_path: None,
            error: None,
        }
    }

    pub fn completed(
        job_id: &str,
        filename: &str,
        printed: bool,
        output_path: Option<&str>,
    ) -> Self {
        let mut event = Self::new(
            job_id,
            filename,
            JobStage::Completed,
            "Job processed",
        );
        event.printed = Some(printed);
        event.output_path = output_path.map(String::from);
        event
    }

    pub fn failed(job_id: &str, filename: &str, error: &str) -> Self {
        let mut event = Self::new(job_id, filename, JobStage::Failed, "Job failed");
        event.error = Some(error.to_string());
        event
    }
}

/// Broadcasts job events to any number of observers.
#[derive(Clone)]
pub struct JobEventBroadcaster {
    sender: Arc<broadcast::Sender<JobEvent>>,
}

impl JobEventBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Sends an event to all subscribers. No active receivers is fine.
    pub fn send(&self, event: JobEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<JobEvent> {
        self.sender.subscribe()
    }

    pub fn sender(&self) -> Arc<broadcast::Sender<JobEvent>> {
        Arc::clone(&self.sender)
    }
}

impl Default for JobEventBroadcaster {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Emits events for a single job.
pub struct JobEventTracker {
    job_id: String,
    filename: String,
    sender: Arc<broadcast::Sender<JobEvent>>,
}

impl JobEventTracker {
    pub fn new(job_id: &str, filename: &str, sender: Arc<broadcast::Sender<JobEvent>>) -> Self {
        Self {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
            sender,
        }
    }

    pub fn update_stage(&self, stage: JobStage, message: &str) {
        let event = JobEvent::new(&self.job_id, &self.filename, stage, message);
        let _ = self.sender.send(event);
    }

    pub fn completed(&self, printed: bool, output_path: Option<&str>) {
        let event = JobEvent::completed(&self.job_id, &self.filename, printed, output_path);
        let _ = self.sender.send(event);
    }

    pub fn failed(&self, error: &str) {
        let event = JobEvent::failed(&self.job_id, &self.filename, error);
        let _ = self.sender.send(event);
    }
}
