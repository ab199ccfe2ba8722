use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use notify::{Config as NotifyConfig, PollWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer_opt, Config as DebouncerConfig, DebouncedEventKind};
use walkdir::WalkDir;

use crate::error::WorkerError;
use crate::worker::job::Job;

/// Hidden files (editor droppings, half-written uploads) are not jobs.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true)
}

/// Observes the queue directory: a one-time startup sweep plus a filesystem
/// watch. Every visible file is one pending job.
pub struct QueueScanner {
    queue_directory: PathBuf,
}

impl QueueScanner {
    pub fn new<P: AsRef<Path>>(queue_directory: P) -> Self {
        Self {
            queue_directory: queue_directory.as_ref().to_path_buf(),
        }
    }

    pub fn queue_directory(&self) -> &Path {
        &self.queue_directory
    }

    /// Startup sweep: picks up jobs that were dropped while the agent was
    /// not running. Top level only.
    pub fn scan(&self) -> Result<Vec<Job>, WorkerError> {
        let mut jobs = Vec::new();

        for entry in WalkDir::new(&self.queue_directory)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_dir() || is_hidden(path) {
                continue;
            }

            debug!("Found pending job: {}", path.display());
            jobs.push(Job::new(path.to_path_buf()));
        }

        info!(
            "Scanned {} pending jobs in {}",
            jobs.len(),
            self.queue_directory.display()
        );
        Ok(jobs)
    }

    /// Watches for new files until `shutdown` is set. Each new file is
    /// delivered to `callback` exactly once.
    pub fn watch<F>(&self, callback: F, shutdown: Arc<AtomicBool>) -> Result<(), WorkerError>
    where
        F: Fn(PathBuf) + Send + 'static,
    {
        let queue_dir = self.queue_directory.clone();

        // PollWatcher for Docker/NFS compatibility
        let poll_config = NotifyConfig::default().with_poll_interval(Duration::from_secs(2));

        let debouncer_config = DebouncerConfig::default()
            .with_timeout(Duration::from_millis(500))
            .with_notify_config(poll_config);

        let (tx, rx) = std::sync::mpsc::channel();

        let mut debouncer = new_debouncer_opt::<_, PollWatcher>(debouncer_config, tx)
            .map_err(|e| WorkerError::WatchError(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&queue_dir, RecursiveMode::NonRecursive)
            .map_err(|e| WorkerError::WatchError(e.to_string()))?;

        info!("Watching queue directory: {}", queue_dir.display());

        loop {
            if shutdown.load(Ordering::Relaxed) {
                info!("Watch mode shutting down...");
                break;
            }

            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(Ok(events)) => {
                    for event in events {
                        if matches!(event.kind, DebouncedEventKind::Any) {
                            let path = &event.path;

                            if path.is_dir() || is_hidden(path) {
                                continue;
                            }

                            // Deletion events for consumed jobs also land
                            // here; only existing files are new work.
                            if path.exists() {
                                info!("New job detected: {}", path.display());
                                callback(path.to_path_buf());
                            }
                        }
                    }
                }
                Ok(Err(errors)) => {
                    warn!("Watch error: {:?}", errors);
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                    continue;
                }
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                    error!("Watch channel disconnected");
                    break;
                }
            }
        }

        Ok(())
    }
}
