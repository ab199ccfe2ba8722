use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info_span, warn};

use crate::broadcast::job_events::JobStage;
use crate::error::{PrintError, TemplateError};
use crate::printing::PrintSpooler;
use crate::render::{DocumentRenderer, RenderRequest};
use crate::sanitize;
use crate::storage::ArtifactStore;
use crate::worker::job::{DiscardReason, JobOutcome, JobResult};

use super::config::PipelineConfig;
use super::context::JobContext;
use super::descriptor::JobDescriptor;
use super::error::{PipelineError, PipelineWarning};
use super::progress::{ProgressEvent, ProgressReporter};

pub struct Pipeline {
    config: Arc<PipelineConfig>,
    renderer: Arc<dyn DocumentRenderer>,
    spooler: Arc<dyn PrintSpooler>,
    storage: ArtifactStore,
}

impl Pipeline {
    pub fn new(
        config: Arc<PipelineConfig>,
        renderer: Arc<dyn DocumentRenderer>,
        spooler: Arc<dyn PrintSpooler>,
    ) -> Self {
        let storage = ArtifactStore::new(&config.output_directory);
        Self {
            config,
            renderer,
            spooler,
            storage,
        }
    }

    /// Run the full pipeline for one job. The source file is gone by the
    /// time this returns, whatever the outcome.
    pub fn run(
        &self,
        mut ctx: JobContext,
        progress: &dyn ProgressReporter,
    ) -> (JobResult, JobContext) {
        let filename = sanitize::redact_path(&ctx.job.source_path);
        let _pipeline_span = info_span!("job",
            job_id = %ctx.job.id,
            filename = %filename,
        )
        .entered();

        // Step 1: Parse the descriptor
        {
            let _step = info_span!("parse").entered();
            progress.report(ProgressEvent::Stage {
                stage: JobStage::Parsing,
                message: "Parsing job descriptor...".to_string(),
            });
            if let Err(e) = self.step_parse(&mut ctx) {
                return self.discard(ctx, DiscardReason::Malformed(e.to_string()), progress);
            }
        }

        // Step 2: Resolve the template
        {
            let _step = info_span!("resolve_template").entered();
            progress.report(ProgressEvent::Stage {
                stage: JobStage::Validating,
                message: "Resolving template...".to_string(),
            });
            if let Err(e) = self.step_resolve_template(&mut ctx) {
                let reason = match e {
                    PipelineError::Template(TemplateError::UnknownTemplate(selector)) => {
                        DiscardReason::UnknownTemplate(selector)
                    }
                    other => DiscardReason::TemplateUnreadable(other.to_string()),
                };
                return self.discard(ctx, reason, progress);
            }
        }

        // Step 3: Render
        {
            let _step = info_span!("render").entered();
            progress.report(ProgressEvent::Stage {
                stage: JobStage::Rendering,
                message: "Rendering document...".to_string(),
            });
            if let Err(e) = self.step_render(&mut ctx) {
                // A failed render is still a consumed job: skip output,
                // remove the source file.
                let err_msg = e.to_string();
                warn!("Render failed: {err_msg}");
                self.step_cleanup_source(&mut ctx);
                progress.report(ProgressEvent::Failed {
                    error: err_msg.clone(),
                });
                let result = JobResult::new(&ctx.job, JobOutcome::RenderFailed { error: err_msg });
                return (result, ctx);
            }
        }

        // Step 4: Print (never fatal)
        {
            let _step = info_span!("print").entered();
            progress.report(ProgressEvent::Stage {
                stage: JobStage::Printing,
                message: "Submitting to printer...".to_string(),
            });
            self.step_print(&mut ctx);
        }

        // Step 5: Finalize or discard the artifact
        {
            let _step = info_span!("finalize").entered();
            progress.report(ProgressEvent::Stage {
                stage: JobStage::Finalizing,
                message: "Finalizing artifact...".to_string(),
            });
            self.step_finalize_artifact(&mut ctx);
        }

        // Step 6: Remove the source job file
        {
            let _step = info_span!("cleanup").entered();
            self.step_cleanup_source(&mut ctx);
        }

        progress.report(ProgressEvent::Completed {
            printed: ctx.printed,
            output_path: ctx.output_path.as_ref().map(|p| p.display().to_string()),
        });

        let result = JobResult::new(
            &ctx.job,
            JobOutcome::Completed {
                printed: ctx.printed,
                output_path: ctx.output_path.clone(),
            },
        );
        (result, ctx)
    }

    /// Terminal path for jobs that never produced a document: log, remove
    /// the source file, report the discard.
    fn discard(
        &self,
        mut ctx: JobContext,
        reason: DiscardReason,
        progress: &dyn ProgressReporter,
    ) -> (JobResult, JobContext) {
        warn!("Discarding job: {reason}");
        self.step_cleanup_source(&mut ctx);
        progress.report(ProgressEvent::Failed {
            error: reason.to_string(),
        });
        let result = JobResult::new(&ctx.job, JobOutcome::Discarded(reason));
        (result, ctx)
    }

    fn step_parse(&self, ctx: &mut JobContext) -> Result<(), PipelineError> {
        let path = &ctx.job.source_path;
        let content = std::fs::read_to_string(path).map_err(|e| PipelineError::ReadJob {
            path: path.clone(),
            source: e,
        })?;

        let descriptor = JobDescriptor::parse(&content)?;
        ctx.identity = Some(descriptor.identity());
        ctx.descriptor = Some(descriptor);
        Ok(())
    }

    fn step_resolve_template(&self, ctx: &mut JobContext) -> Result<(), PipelineError> {
        let descriptor = ctx.descriptor.as_ref().expect("parse step completed");

        let template = self.config.templates.resolve(&descriptor.template)?;
        let source = self.config.templates.load_source(template)?;

        ctx.template = Some(template.clone());
        ctx.template_source = Some(source);
        Ok(())
    }

    fn step_render(&self, ctx: &mut JobContext) -> Result<(), PipelineError> {
        let descriptor = ctx.descriptor.as_ref().expect("parse step completed");
        let identity = ctx.identity.as_ref().expect("parse step completed");
        let template = ctx.template.as_ref().expect("resolve step completed");
        let source = ctx.template_source.as_ref().expect("resolve step completed");

        let context = descriptor.render_context(identity, Local::now());
        let layout = template.page_layout();

        let bytes = self.renderer.render(&RenderRequest {
            template: source,
            context: &context,
            layout: &layout,
            engine_override: descriptor.engine_path.as_deref(),
        })?;

        let temp = self
            .storage
            .write_temp(&ctx.job.id, self.renderer.extension(), &bytes)?;
        ctx.artifact_path = Some(temp);
        Ok(())
    }

    /// Output decision. Print failures downgrade the job to "not printed";
    /// they never abort it.
    fn step_print(&self, ctx: &mut JobContext) {
        let descriptor = ctx.descriptor.as_ref().expect("parse step completed");
        let artifact = ctx.artifact_path.as_ref().expect("render step completed");

        if !descriptor.print {
            debug!("Print disabled by descriptor");
            return;
        }

        let resolved = descriptor
            .printer_name
            .as_deref()
            .map(|alias| self.config.printer_aliases.resolve(alias));

        // The existence check applies only to explicitly requested printers;
        // default-printer jobs are never blocked by a stale listing.
        if let Some(printer) = &resolved {
            match self.spooler.available_printers() {
                Ok(printers) if !printers.iter().any(|p| p == printer) => {
                    let e = PrintError::Unavailable(printer.clone());
                    warn!("Print failed: {e}");
                    ctx.warnings.push(PipelineWarning::PrintFailed {
                        printer: Some(printer.clone()),
                        error: e.to_string(),
                    });
                    return;
                }
                Err(e) => {
                    warn!("Failed to list printers: {e}");
                    ctx.warnings.push(PipelineWarning::PrintFailed {
                        printer: Some(printer.clone()),
                        error: e.to_string(),
                    });
                    return;
                }
                Ok(_) => {}
            }
        }

        match self.spooler.submit(artifact, resolved.as_deref()) {
            Ok(()) => {
                debug!("Printed on {}", resolved.as_deref().unwrap_or("<default>"));
                ctx.printed = true;
            }
            Err(e) => {
                warn!("Print failed: {e}");
                ctx.warnings.push(PipelineWarning::PrintFailed {
                    printer: resolved,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Keeps the artifact when saving was requested or printing did not
    /// happen; otherwise removes it. A rendered document is never lost.
    fn step_finalize_artifact(&self, ctx: &mut JobContext) {
        let descriptor = ctx.descriptor.as_ref().expect("parse step completed");
        let identity = ctx.identity.as_ref().expect("parse step completed");
        let temp = ctx.artifact_path.as_ref().expect("render step completed");

        let must_save = descriptor.save_artifact || !ctx.printed;

        if must_save {
            match self.storage.finalize(temp, identity, Local::now()) {
                Ok(final_path) => {
                    debug!(
                        "Artifact saved: {}",
                        sanitize::redact_path(&final_path)
                    );
                    ctx.output_path = Some(final_path);
                }
                Err(e) => {
                    warn!("Failed to finalize artifact: {e}");
                    ctx.warnings.push(PipelineWarning::FinalizeFailed {
                        path: temp.clone(),
                        error: e.to_string(),
                    });
                }
            }
        } else if let Err(e) = self.storage.discard(temp) {
            warn!("Failed to remove temp artifact: {e}");
            ctx.warnings.push(PipelineWarning::TempDiscardFailed {
                path: temp.clone(),
                error: e.to_string(),
            });
        }
    }

    /// Unconditional removal of the source job file: the queue never
    /// re-processes a job and never grows from repeated failures.
    fn step_cleanup_source(&self, ctx: &mut JobContext) {
        let path = &ctx.job.source_path;
        if let Err(e) = std::fs::remove_file(path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove job file: {e}");
                ctx.warnings.push(PipelineWarning::SourceCleanupFailed {
                    path: path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PrintError, RenderError};
    use crate::pipeline::progress::NoopProgress;
    use crate::printing::PrinterAliasMap;
    use crate::render::HtmlRenderer;
    use crate::templates::{TemplateDescriptor, TemplateRegistry};
    use crate::worker::job::Job;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Spooler double recording submissions.
    struct MockSpooler {
        printers: Vec<String>,
        fail_submit: bool,
        fail_list: bool,
        submissions: Mutex<Vec<(PathBuf, Option<String>)>>,
    }

    impl MockSpooler {
        fn accepting(printers: &[&str]) -> Self {
            Self {
                printers: printers.iter().map(|s| s.to_string()).collect(),
                fail_submit: false,
                fail_list: false,
                submissions: Mutex::new(Vec::new()),
            }
        }

        fn rejecting(printers: &[&str]) -> Self {
            Self {
                fail_submit: true,
                ..Self::accepting(printers)
            }
        }

        fn submissions(&self) -> Vec<(PathBuf, Option<String>)> {
            self.submissions.lock().unwrap().clone()
        }
    }

    impl PrintSpooler for MockSpooler {
        fn available_printers(&self) -> Result<Vec<String>, PrintError> {
            if self.fail_list {
                return Err(PrintError::List {
                    detail: "directory offline".to_string(),
                });
            }
            Ok(self.printers.clone())
        }

        fn submit(&self, document: &Path, printer: Option<&str>) -> Result<(), PrintError> {
            self.submissions
                .lock()
                .unwrap()
                .push((document.to_path_buf(), printer.map(String::from)));
            if self.fail_submit {
                return Err(PrintError::Submit {
                    printer: printer.map(String::from),
                    detail: "device error".to_string(),
                });
            }
            Ok(())
        }
    }

    /// Renderer double that always fails.
    struct FailingRenderer;

    impl DocumentRenderer for FailingRenderer {
        fn extension(&self) -> &str {
            "pdf"
        }

        fn render(&self, _request: &RenderRequest<'_>) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::EngineFailed {
                status: "exit status: 1".to_string(),
                stderr: "content error".to_string(),
            })
        }
    }

    struct Fixture {
        _tmp: TempDir,
        queue: PathBuf,
        output: PathBuf,
        config: Arc<PipelineConfig>,
    }

    fn fixture(aliases: &[(&str, &str)]) -> Fixture {
        let tmp = TempDir::new().unwrap();
        let queue = tmp.path().join("queue");
        let output = tmp.path().join("output");
        let templates_dir = tmp.path().join("templates");
        std::fs::create_dir_all(&queue).unwrap();
        std::fs::create_dir_all(&output).unwrap();
        std::fs::create_dir_all(&templates_dir).unwrap();

        std::fs::write(
            templates_dir.join("receipt.html"),
            "<p>{{invoiceNo}} {{customer}}</p>",
        )
        .unwrap();

        let templates = TemplateRegistry::new(
            &templates_dir,
            HashMap::from([(
                "receipt".to_string(),
                TemplateDescriptor {
                    file: "receipt.html".to_string(),
                    format: None,
                    width: Some("80mm".to_string()),
                },
            )]),
        );

        let alias_map = PrinterAliasMap::new(
            aliases
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );

        let config = Arc::new(PipelineConfig {
            queue_directory: queue.clone(),
            output_directory: output.clone(),
            templates,
            printer_aliases: alias_map,
        });

        Fixture {
            _tmp: tmp,
            queue,
            output,
            config,
        }
    }

    fn pipeline_with(fx: &Fixture, spooler: Arc<dyn PrintSpooler>) -> Pipeline {
        Pipeline::new(Arc::clone(&fx.config), Arc::new(HtmlRenderer::new()), spooler)
    }

    fn drop_job(fx: &Fixture, name: &str, content: &str) -> JobContext {
        let path = fx.queue.join(name);
        std::fs::write(&path, content).unwrap();
        JobContext::new(Job::new(path))
    }

    fn saved_artifacts(fx: &Fixture) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&fx.output)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .collect();
        files.sort();
        files
    }

    // ── Happy paths ──

    #[test]
    fn test_printed_job_keeps_no_artifact() {
        let fx = fixture(&[]);
        let spooler = Arc::new(MockSpooler::accepting(&[]));
        let pipeline = pipeline_with(&fx, Arc::clone(&spooler) as Arc<dyn PrintSpooler>);

        let ctx = drop_job(&fx, "job.json", r#"{ "invoiceNo": "INV-1" }"#);
        let source = ctx.job.source_path.clone();
        let (result, ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(result.printed());
        assert!(result.output_path().is_none());
        assert!(!source.exists(), "source file must be consumed");
        assert!(saved_artifacts(&fx).is_empty(), "temp must be removed");
        assert!(ctx.warnings.is_empty());
        // Submitted to the default printer
        assert_eq!(spooler.submissions().len(), 1);
        assert_eq!(spooler.submissions()[0].1, None);
    }

    #[test]
    fn test_save_artifact_keeps_document_even_when_printed() {
        let fx = fixture(&[]);
        let spooler = Arc::new(MockSpooler::accepting(&[]));
        let pipeline = pipeline_with(&fx, spooler);

        let ctx = drop_job(
            &fx,
            "job.json",
            r#"{ "invoiceNo": "INV-2", "saveArtifact": true }"#,
        );
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(result.printed());
        let output = result.output_path().unwrap();
        assert!(output.exists());
        let name = output.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("INV-2-"));
        assert!(name.ends_with(".html"));
    }

    #[test]
    fn test_print_false_still_saves_artifact() {
        let fx = fixture(&[]);
        let spooler = Arc::new(MockSpooler::accepting(&[]));
        let pipeline = pipeline_with(&fx, Arc::clone(&spooler) as Arc<dyn PrintSpooler>);

        let ctx = drop_job(
            &fx,
            "job.json",
            r#"{ "invoiceNo": "INV-3", "print": false, "saveArtifact": false }"#,
        );
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(!result.printed());
        assert!(result.output_path().unwrap().exists());
        assert!(spooler.submissions().is_empty());
    }

    #[test]
    fn test_rendered_content_reaches_artifact() {
        let fx = fixture(&[]);
        let pipeline = pipeline_with(&fx, Arc::new(MockSpooler::accepting(&[])));

        let ctx = drop_job(
            &fx,
            "job.json",
            r#"{ "invoiceNo": "INV-4", "print": false, "customer": "Acme" }"#,
        );
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        let content = std::fs::read_to_string(result.output_path().unwrap()).unwrap();
        assert_eq!(content, "<p>INV-4 Acme</p>");
    }

    // ── Printer resolution ──

    #[test]
    fn test_alias_resolution_precedence() {
        let fx = fixture(&[("pos", "TM-T20")]);
        let spooler = Arc::new(MockSpooler::accepting(&["TM-T20"]));
        let pipeline = pipeline_with(&fx, Arc::clone(&spooler) as Arc<dyn PrintSpooler>);

        let ctx = drop_job(
            &fx,
            "job.json",
            r#"{ "invoiceNo": "INV-5", "printerName": "pos" }"#,
        );
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(result.printed());
        assert_eq!(spooler.submissions()[0].1.as_deref(), Some("TM-T20"));
    }

    #[test]
    fn test_unmapped_alias_used_literally() {
        let fx = fixture(&[]);
        let spooler = Arc::new(MockSpooler::accepting(&["Office-HP"]));
        let pipeline = pipeline_with(&fx, Arc::clone(&spooler) as Arc<dyn PrintSpooler>);

        let ctx = drop_job(
            &fx,
            "job.json",
            r#"{ "invoiceNo": "INV-6", "printerName": "Office-HP" }"#,
        );
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(result.printed());
        assert_eq!(spooler.submissions()[0].1.as_deref(), Some("Office-HP"));
    }

    #[test]
    fn test_unavailable_printer_downgrades_to_saved() {
        let fx = fixture(&[("pos", "TM-T20")]);
        let spooler = Arc::new(MockSpooler::accepting(&["Some-Other"]));
        let pipeline = pipeline_with(&fx, Arc::clone(&spooler) as Arc<dyn PrintSpooler>);

        let ctx = drop_job(
            &fx,
            "job.json",
            r#"{ "invoiceNo": "INV-7", "printerName": "pos" }"#,
        );
        let source = ctx.job.source_path.clone();
        let (result, ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(!result.printed());
        assert!(result.output_path().unwrap().exists());
        assert!(!source.exists());
        assert!(spooler.submissions().is_empty(), "must not submit");
        assert!(matches!(
            ctx.warnings.as_slice(),
            [PipelineWarning::PrintFailed { .. }]
        ));
    }

    #[test]
    fn test_default_printer_skips_existence_check() {
        let fx = fixture(&[]);
        // Listing fails, but submission succeeds: default-printer jobs must
        // not be blocked by the directory.
        let spooler = Arc::new(MockSpooler {
            fail_list: true,
            ..MockSpooler::accepting(&[])
        });
        let pipeline = pipeline_with(&fx, Arc::clone(&spooler) as Arc<dyn PrintSpooler>);

        let ctx = drop_job(&fx, "job.json", r#"{ "invoiceNo": "INV-8" }"#);
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(result.printed());
    }

    #[test]
    fn test_submission_error_downgrades_to_saved() {
        let fx = fixture(&[]);
        let spooler = Arc::new(MockSpooler::rejecting(&[]));
        let pipeline = pipeline_with(&fx, spooler);

        let ctx = drop_job(&fx, "job.json", r#"{ "invoiceNo": "INV-9" }"#);
        let (result, ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(!result.printed());
        assert!(result.output_path().unwrap().exists());
        assert!(matches!(
            ctx.warnings.as_slice(),
            [PipelineWarning::PrintFailed { .. }]
        ));
    }

    // ── Discard paths ──

    #[test]
    fn test_malformed_descriptor_discarded() {
        let fx = fixture(&[]);
        let pipeline = pipeline_with(&fx, Arc::new(MockSpooler::accepting(&[])));

        let ctx = drop_job(&fx, "bad.json", "{definitely not json");
        let source = ctx.job.source_path.clone();
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(matches!(
            result.outcome,
            JobOutcome::Discarded(DiscardReason::Malformed(_))
        ));
        assert!(!source.exists());
        assert!(saved_artifacts(&fx).is_empty());
    }

    #[test]
    fn test_unknown_template_discarded() {
        let fx = fixture(&[]);
        let pipeline = pipeline_with(&fx, Arc::new(MockSpooler::accepting(&[])));

        let ctx = drop_job(&fx, "job.json", r#"{ "template": "nonexistent" }"#);
        let source = ctx.job.source_path.clone();
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(matches!(
            result.outcome,
            JobOutcome::Discarded(DiscardReason::UnknownTemplate(ref s)) if s == "nonexistent"
        ));
        assert!(!source.exists());
        assert!(saved_artifacts(&fx).is_empty());
    }

    #[test]
    fn test_missing_template_file_discarded() {
        let fx = fixture(&[]);
        std::fs::remove_file(fx.config.templates.template_directory().join("receipt.html"))
            .unwrap();
        let pipeline = pipeline_with(&fx, Arc::new(MockSpooler::accepting(&[])));

        let ctx = drop_job(&fx, "job.json", r#"{ "invoiceNo": "INV-10" }"#);
        let source = ctx.job.source_path.clone();
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(matches!(
            result.outcome,
            JobOutcome::Discarded(DiscardReason::TemplateUnreadable(_))
        ));
        assert!(!source.exists());
        assert!(saved_artifacts(&fx).is_empty());
    }

    // ── Render failure ──

    #[test]
    fn test_render_failure_consumes_job_without_output() {
        let fx = fixture(&[]);
        let spooler = Arc::new(MockSpooler::accepting(&[]));
        let pipeline = Pipeline::new(
            Arc::clone(&fx.config),
            Arc::new(FailingRenderer),
            Arc::clone(&spooler) as Arc<dyn PrintSpooler>,
        );

        let ctx = drop_job(&fx, "job.json", r#"{ "invoiceNo": "INV-11" }"#);
        let source = ctx.job.source_path.clone();
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        assert!(matches!(result.outcome, JobOutcome::RenderFailed { .. }));
        assert!(!source.exists(), "failed jobs are consumed, not preserved");
        assert!(saved_artifacts(&fx).is_empty());
        assert!(spooler.submissions().is_empty());
    }

    // ── Identity handling ──

    #[test]
    fn test_missing_identity_gets_generated_fallback() {
        let fx = fixture(&[]);
        let pipeline = pipeline_with(&fx, Arc::new(MockSpooler::rejecting(&[])));

        let ctx = drop_job(&fx, "job.json", r#"{ "customer": "Acme" }"#);
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        let name = result
            .output_path()
            .unwrap()
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(name.starts_with("unknown-"));
    }

    #[test]
    fn test_identity_sanitized_in_filename() {
        let fx = fixture(&[]);
        let pipeline = pipeline_with(&fx, Arc::new(MockSpooler::rejecting(&[])));

        let ctx = drop_job(&fx, "job.json", r#"{ "invoiceNo": "INV/12#x" }"#);
        let (result, _ctx) = pipeline.run(ctx, &NoopProgress);

        let name = result
            .output_path()
            .unwrap()
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(name.starts_with("INV_12_x-"));
    }
}
