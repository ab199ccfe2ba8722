use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error, info};
use tokio::sync::broadcast;

use crate::broadcast::job_events::{JobEvent, JobStage};
use crate::pipeline::progress::{BroadcastProgress, NoopProgress, ProgressReporter};
use crate::pipeline::{JobContext, Pipeline, PipelineConfig};
use crate::printing::PrintSpooler;
use crate::render::DocumentRenderer;
use crate::worker::job::{Job, JobResult};

pub struct WorkerPool {
    job_sender: Sender<Job>,
    result_receiver: Receiver<JobResult>,
    workers: Vec<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    /// Kept to hold the broadcast sender alive; workers use cloned Arcs.
    #[allow(dead_code)]
    event_sender: Option<Arc<broadcast::Sender<JobEvent>>>,
}

impl WorkerPool {
    pub fn new(
        config: Arc<PipelineConfig>,
        renderer: Arc<dyn DocumentRenderer>,
        spooler: Arc<dyn PrintSpooler>,
        worker_count: usize,
    ) -> Self {
        Self::with_event_sender(config, renderer, spooler, worker_count, None)
    }

    /// Creates a new worker pool with an optional job event broadcaster.
    ///
    /// # Panics
    /// Panics if `worker_count` is 0.
    pub fn with_event_sender(
        config: Arc<PipelineConfig>,
        renderer: Arc<dyn DocumentRenderer>,
        spooler: Arc<dyn PrintSpooler>,
        worker_count: usize,
        event_sender: Option<Arc<broadcast::Sender<JobEvent>>>,
    ) -> Self {
        assert!(worker_count > 0, "worker_count must be > 0");
        let (job_sender, job_receiver) = bounded::<Job>(worker_count * 2);
        let (result_sender, result_receiver) = bounded::<JobResult>(worker_count * 2);
        let shutdown = Arc::new(AtomicBool::new(false));

        let mut workers = Vec::with_capacity(worker_count);

        for worker_id in 0..worker_count {
            let job_rx = job_receiver.clone();
            let result_tx = result_sender.clone();
            let shutdown_flag = Arc::clone(&shutdown);
            let worker_config = Arc::clone(&config);
            let worker_renderer = Arc::clone(&renderer);
            let worker_spooler = Arc::clone(&spooler);
            let sender = event_sender.clone();

            let handle = thread::spawn(move || {
                run_worker(
                    worker_id,
                    job_rx,
                    result_tx,
                    shutdown_flag,
                    worker_config,
                    worker_renderer,
                    worker_spooler,
                    sender,
                );
            });

            workers.push(handle);
        }

        info!("Started {} workers", worker_count);

        Self {
            job_sender,
            result_receiver,
            workers,
            shutdown,
            event_sender,
        }
    }

    pub fn submit(&self, job: Job) -> Result<(), crate::error::WorkerError> {
        if self.shutdown.load(Ordering::Relaxed) {
            return Err(crate::error::WorkerError::ChannelClosed);
        }

        self.job_sender
            .send(job)
            .map_err(|_| crate::error::WorkerError::ChannelClosed)
    }

    pub fn try_recv_result(&self) -> Option<JobResult> {
        self.result_receiver.try_recv().ok()
    }

    pub fn recv_result(&self) -> Option<JobResult> {
        self.result_receiver.recv().ok()
    }

    pub fn shutdown(&self) {
        info!("Shutting down worker pool...");
        self.shutdown.store(true, Ordering::Relaxed);
    }

    pub fn wait(self) {
        // Drop sender to signal workers to exit
        drop(self.job_sender);

        for (i, worker) in self.workers.into_iter().enumerate() {
            if let Err(e) = worker.join() {
                error!("Worker {} panicked: {:?}", i, e);
            } else {
                debug!("Worker {} finished", i);
            }
        }

        info!("All workers have stopped");
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }
}

#[allow(clippy::too_many_arguments)]
fn run_worker(
    worker_id: usize,
    job_receiver: Receiver<Job>,
    result_sender: Sender<JobResult>,
    shutdown: Arc<AtomicBool>,
    config: Arc<PipelineConfig>,
    renderer: Arc<dyn DocumentRenderer>,
    spooler: Arc<dyn PrintSpooler>,
    event_sender: Option<Arc<broadcast::Sender<JobEvent>>>,
) {
    debug!("Worker {} started", worker_id);

    let pipeline = Pipeline::new(config, renderer, spooler);

    loop {
        if shutdown.load(Ordering::Relaxed) {
            debug!("Worker {} received shutdown signal", worker_id);
            break;
        }

        match job_receiver.recv_timeout(std::time::Duration::from_millis(100)) {
            Ok(job) => {
                debug!("Worker {} processing job: {:?}", worker_id, job.source_path);

                let result = if let Some(ref sender) = event_sender {
                    let filename = job
                        .source_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string());

                    let progress =
                        BroadcastProgress::new(&job.id, &filename, Arc::clone(sender));

                    progress.report(crate::pipeline::ProgressEvent::Stage {
                        stage: JobStage::Queued,
                        message: "Job queued for processing".to_string(),
                    });

                    let ctx = JobContext::new(job);
                    let (result, _ctx) = pipeline.run(ctx, &progress);
                    result
                } else {
                    let ctx = JobContext::new(job);
                    let (result, _ctx) = pipeline.run(ctx, &NoopProgress);
                    result
                };

                if let Err(e) = result_sender.send(result) {
                    error!("Worker {} failed to send result: {}", worker_id, e);
                    break;
                }
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                continue;
            }
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                debug!("Worker {} job channel disconnected", worker_id);
                break;
            }
        }
    }

    debug!("Worker {} stopped", worker_id);
}
