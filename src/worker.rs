//! Background highlighting for large buffers.
//!
//! The editor submits full text snapshots; a single worker thread highlights
//! them one at a time. Each submission gets a generation number, and only a
//! result for the newest generation is ever handed back. Queued jobs that
//! have been superseded are skipped, and results of stale in-flight jobs are
//! dropped on receipt.

use crate::{Highlighter, Options};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Rendered markup for one submitted snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    pub generation: u64,
    pub html: String,
}

struct Job {
    generation: u64,
    source: String,
}

/// Handle to the highlight worker thread. Dropping it stops the thread.
pub struct HighlightWorker {
    latest: Arc<AtomicU64>,
    jobs: Option<Sender<Job>>,
    results: Receiver<Highlighted>,
    handle: Option<JoinHandle<()>>,
}

impl HighlightWorker {
    pub fn spawn(options: Options) -> io::Result<Self> {
        let (job_tx, job_rx) = unbounded::<Job>();
        let (result_tx, result_rx) = unbounded::<Highlighted>();
        let latest = Arc::new(AtomicU64::new(0));
        let highlighter = Highlighter::new(options);

        let worker_latest = Arc::clone(&latest);
        let handle = thread::Builder::new()
            .name("highlight-worker".to_string())
            .spawn(move || run(highlighter, job_rx, result_tx, worker_latest))?;

        Ok(Self {
            latest,
            jobs: Some(job_tx),
            results: result_rx,
            handle: Some(handle),
        })
    }

    /// Submit a snapshot; it supersedes every earlier submission.
    /// Returns its generation.
    pub fn submit(&self, source: impl Into<String>) -> u64 {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let job = Job { generation, source: source.into() };

        let sent = self.jobs.as_ref().is_some_and(|jobs| jobs.send(job).is_ok());
        if !sent {
            tracing::warn!(generation, "highlight worker is gone, submission dropped");
        }
        generation
    }

    /// Generation of the most recent submission (0 before any).
    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// Non-blocking: the result for the newest submission, if it is ready.
    pub fn try_latest(&self) -> Option<Highlighted> {
        newest_current(self.results.try_iter(), self.latest_generation())
    }

    /// Block until the newest submission is highlighted or `timeout` passes.
    pub fn wait_latest(&self, timeout: Duration) -> Option<Highlighted> {
        // A deadline past what `Instant` can represent means wait without one
        let deadline = Instant::now().checked_add(timeout);
        loop {
            let received = match deadline {
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    self.results.recv_timeout(remaining)
                }
                None => self.results.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(result) if result.generation == self.latest_generation() => return Some(result),
                Ok(stale) => {
                    tracing::debug!(generation = stale.generation, "discarding stale highlight");
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }
}

impl Drop for HighlightWorker {
    fn drop(&mut self) {
        // Closing the job channel ends the worker loop
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("highlight worker panicked");
            }
        }
    }
}

/// Keep only a result for `current`; anything older is stale.
fn newest_current(results: impl Iterator<Item = Highlighted>, current: u64) -> Option<Highlighted> {
    let mut newest = None;
    for result in results {
        if result.generation == current {
            newest = Some(result);
        } else {
            tracing::debug!(generation = result.generation, current, "discarding stale highlight");
        }
    }
    newest
}

fn run(
    highlighter: Highlighter,
    jobs: Receiver<Job>,
    results: Sender<Highlighted>,
    latest: Arc<AtomicU64>,
) {
    while let Ok(mut job) = jobs.recv() {
        // Skip straight to the newest queued snapshot
        for newer in jobs.try_iter() {
            tracing::trace!(skipped = job.generation, "superseded before start");
            job = newer;
        }
        if job.generation < latest.load(Ordering::Acquire) {
            continue;
        }

        let html = highlighter.highlight(&job.source);
        if results.send(Highlighted { generation: job.generation, html }).is_err() {
            break;
        }
    }
    tracing::debug!("highlight worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(generation: u64) -> Highlighted {
        Highlighted { generation, html: format!("gen {}", generation) }
    }

    #[test]
    fn test_newest_current_drops_stale() {
        let results = vec![result(1), result(2), result(3)];
        assert_eq!(newest_current(results.into_iter(), 3), Some(result(3)));
    }

    #[test]
    fn test_newest_current_none_when_only_stale() {
        let results = vec![result(1), result(2)];
        assert_eq!(newest_current(results.into_iter(), 3), None);
    }

    #[test]
    fn test_generations_increase() {
        let worker = HighlightWorker::spawn(Options::default()).unwrap();
        assert_eq!(worker.latest_generation(), 0);
        assert_eq!(worker.submit("a"), 1);
        assert_eq!(worker.submit("b"), 2);
        assert_eq!(worker.latest_generation(), 2);
    }
}
