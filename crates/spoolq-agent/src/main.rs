use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};

use spoolq::pipeline::PipelineConfig;
use spoolq::printing::CupsSpooler;
use spoolq::render::EngineRenderer;
use spoolq::worker::{Job, JobOutcome, QueueScanner, WorkerPool};
use spoolq::{load_config, JobEventBroadcaster};

/// Default config location: `<config dir>/spoolq/spoolq.json`.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("spoolq").join("spoolq.json"))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn ensure_directories(config: &PipelineConfig) {
    for dir in [&config.queue_directory, &config.output_directory] {
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!("Failed to create directory {}: {}", dir.display(), e);
        }
    }
    if !config.templates.template_directory().exists() {
        warn!(
            "Template directory does not exist: {}",
            config.templates.template_directory().display()
        );
    }
}

fn run(config_path: &Path) -> Result<(), spoolq::SpoolqError> {
    info!("Starting spoolq agent v{}", env!("CARGO_PKG_VERSION"));
    info!("Using config: {}", config_path.display());

    let agent_config = load_config(config_path)?;
    let base = config_path.parent().unwrap_or(Path::new("."));
    let pipeline_config = Arc::new(PipelineConfig::from_config(&agent_config, base)?);

    ensure_directories(&pipeline_config);

    if pipeline_config.printer_aliases.is_empty() {
        info!("No printer alias map; printer names are used literally");
    }
    info!(
        "Loaded {} template(s) from {}",
        pipeline_config.templates.len(),
        pipeline_config.templates.template_directory().display()
    );

    let renderer = Arc::new(EngineRenderer::new(&agent_config.renderer.engine));
    let spooler = Arc::new(CupsSpooler::new());

    let broadcaster = JobEventBroadcaster::default();
    let pool = Arc::new(WorkerPool::with_event_sender(
        Arc::clone(&pipeline_config),
        renderer,
        spooler,
        agent_config.worker_count,
        Some(broadcaster.sender()),
    ));

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || {
            info!("Shutdown requested");
            shutdown.store(true, Ordering::Relaxed);
        })
        .expect("Failed to install signal handler");
    }

    // Consume job results so the channel never fills up.
    let consumer = {
        let pool = Arc::clone(&pool);
        let shutdown = Arc::clone(&shutdown);
        std::thread::spawn(move || {
            while !shutdown.load(Ordering::Relaxed) {
                if let Some(result) = pool.try_recv_result() {
                    match &result.outcome {
                        JobOutcome::Completed {
                            printed,
                            output_path,
                        } => {
                            info!(
                                "Job done: {} (printed: {}, saved: {:?})",
                                result.source_path.display(),
                                printed,
                                output_path
                            );
                        }
                        JobOutcome::Discarded(reason) => {
                            warn!("Job discarded: {} ({})", result.source_path.display(), reason);
                        }
                        JobOutcome::RenderFailed { error } => {
                            warn!(
                                "Job render failed: {} ({})",
                                result.source_path.display(),
                                error
                            );
                        }
                    }
                } else {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
            info!("Result consumer shutting down");
        })
    };

    let scanner = QueueScanner::new(&pipeline_config.queue_directory);

    // Pick up jobs dropped while the agent was not running.
    info!("Performing initial queue sweep...");
    match scanner.scan() {
        Ok(jobs) => {
            info!("Initial sweep found {} job(s)", jobs.len());
            for job in jobs {
                debug!("Submitting job: {:?}", job.source_path);
                if let Err(e) = pool.submit(job) {
                    error!("Failed to submit job: {}", e);
                }
            }
        }
        Err(e) => {
            error!("Initial sweep failed: {}", e);
        }
    }

    // Watch until shutdown; each new file is one job.
    let pool_for_watch = Arc::clone(&pool);
    scanner.watch(
        move |path| {
            if let Err(e) = pool_for_watch.submit(Job::new(path)) {
                error!("Failed to submit job: {}", e);
            }
        },
        Arc::clone(&shutdown),
    )?;

    pool.shutdown();
    if let Err(e) = consumer.join() {
        error!("Result consumer panicked: {:?}", e);
    }
    if let Ok(pool) = Arc::try_unwrap(pool) {
        pool.wait();
    }

    info!("Agent stopped");
    Ok(())
}

fn main() {
    init_tracing();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(default_config_path)
        .unwrap_or_else(|| PathBuf::from("spoolq.json"));

    if let Err(e) = run(&config_path) {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
