use std::path::PathBuf;

/// One detected entry in the queue directory.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub source_path: PathBuf,
}

impl Job {
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_path,
        }
    }
}

/// Why a job was discarded without producing output.
#[derive(Debug, Clone)]
pub enum DiscardReason {
    /// The descriptor file was unreadable or not valid JSON.
    Malformed(String),
    /// The template selector is not in the registry.
    UnknownTemplate(String),
    /// The selector resolved, but the template file could not be read.
    TemplateUnreadable(String),
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscardReason::Malformed(detail) => write!(f, "malformed job descriptor: {detail}"),
            DiscardReason::UnknownTemplate(selector) => {
                write!(f, "unknown template: {selector}")
            }
            DiscardReason::TemplateUnreadable(detail) => {
                write!(f, "template unreadable: {detail}")
            }
        }
    }
}

/// Tagged outcome of one job's run through the pipeline. Every job reaches
/// exactly one of these; the source file is gone in all cases.
#[derive(Debug, Clone)]
pub enum JobOutcome {
    /// The document was rendered; `printed` reports whether submission to
    /// the spooler succeeded, `output_path` where the artifact was kept.
    Completed {
        printed: bool,
        output_path: Option<PathBuf>,
    },
    /// The job never produced a document and was dropped.
    Discarded(DiscardReason),
    /// Rendering failed; nothing was printed or saved.
    RenderFailed { error: String },
}

#[derive(Debug, Clone)]
pub struct JobResult {
    pub job_id: String,
    pub source_path: PathBuf,
    pub outcome: JobOutcome,
}

impl JobResult {
    pub fn new(job: &Job, outcome: JobOutcome) -> Self {
        Self {
            job_id: job.id.clone(),
            source_path: job.source_path.clone(),
            outcome,
        }
    }

    /// True when the job rendered a document (printed or saved).
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, JobOutcome::Completed { .. })
    }

    pub fn printed(&self) -> bool {
        matches!(self.outcome, JobOutcome::Completed { printed: true, .. })
    }

    pub fn output_path(&self) -> Option<&std::path::Path> {
        match &self.outcome {
            JobOutcome::Completed { output_path, .. } => output_path.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new_assigns_unique_ids() {
        let a = Job::new(PathBuf::from("/queue/a.json"));
        let b = Job::new(PathBuf::from("/queue/b.json"));
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_result_accessors_completed() {
        let job = Job::new(PathBuf::from("/queue/a.json"));
        let result = JobResult::new(
            &job,
            JobOutcome::Completed {
                printed: false,
                output_path: Some(PathBuf::from("/output/a.pdf")),
            },
        );

        assert!(result.is_completed());
        assert!(!result.printed());
        assert_eq!(result.output_path(), Some(std::path::Path::new("/output/a.pdf")));
    }

    #[test]
    fn test_result_accessors_discarded() {
        let job = Job::new(PathBuf::from("/queue/a.json"));
        let result = JobResult::new(
            &job,
            JobOutcome::Discarded(DiscardReason::UnknownTemplate("nope".to_string())),
        );

        assert!(!result.is_completed());
        assert!(!result.printed());
        assert!(result.output_path().is_none());
    }

    #[test]
    fn test_discard_reason_display() {
        let reason = DiscardReason::UnknownTemplate("labels".to_string());
        assert_eq!(reason.to_string(), "unknown template: labels");
    }
}
