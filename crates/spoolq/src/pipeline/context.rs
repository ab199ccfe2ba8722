use std::path::PathBuf;

use crate::pipeline::descriptor::JobDescriptor;
use crate::templates::TemplateDescriptor;
use crate::worker::job::Job;

use super::error::PipelineWarning;

pub struct JobContext {
    // Input
    pub job: Job,

    // Parse result — guaranteed Some after step_parse
    pub descriptor: Option<JobDescriptor>,
    pub identity: Option<String>,

    // Validation result — guaranteed Some after step_resolve_template
    pub template: Option<TemplateDescriptor>,
    pub template_source: Option<String>,

    // Render result
    pub artifact_path: Option<PathBuf>,

    // Output result
    pub printed: bool,
    pub output_path: Option<PathBuf>,

    // Non-fatal warnings
    pub warnings: Vec<PipelineWarning>,
}

impl JobContext {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            descriptor: None,
            identity: None,
            template: None,
            template_source: None,
            artifact_path: None,
            printed: false,
            output_path: None,
            warnings: Vec::new(),
        }
    }
}
