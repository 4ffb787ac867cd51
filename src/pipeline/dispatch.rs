//! Serialized annotation dispatch — strict FIFO through one worker.
//!
//! Every chunk submission, across all callers, goes through a single
//! background worker so remote calls never run concurrently and
//! callbacks fire in exact submission order. A job that exhausts its
//! retries is abandoned: the error is logged, its callback never fires,
//! and the worker moves on to the next job.

use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use super::archive::AnnotationArchive;
use super::parser;
use super::types::{AnnotationService, Job};

/// Handle to the single-consumer annotation queue.
///
/// Explicitly owned: dropping the handle closes the submit side, lets
/// the worker drain every job already queued, and joins the thread, so
/// tests tear the service down deterministically.
pub struct DispatchQueue {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl DispatchQueue {
    /// Start the background worker.
    pub fn start(
        service: Arc<dyn AnnotationService>,
        archive: AnnotationArchive,
        max_retries: u32,
        retry_backoff: Duration,
    ) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker = std::thread::spawn(move || {
            tracing::debug!("Annotation dispatch worker started");
            while let Ok(job) = receiver.recv() {
                process_job(service.as_ref(), &archive, job, max_retries, retry_backoff);
            }
            tracing::debug!("Annotation dispatch worker stopped");
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Enqueue a job. Never blocks the caller; safe from any number of
    /// threads. Jobs are processed strictly in submission order.
    pub fn submit(&self, job: Job) {
        if let Some(sender) = &self.sender {
            if sender.send(job).is_err() {
                tracing::error!("Annotation dispatch worker is gone; job dropped");
            }
        }
    }
}

impl Drop for DispatchQueue {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the queue is
        // drained.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Run one job to terminal disposition: callback on success, abandoned
/// after `max_retries + 1` failed attempts. Never panics the worker.
fn process_job(
    service: &dyn AnnotationService,
    archive: &AnnotationArchive,
    job: Job,
    max_retries: u32,
    retry_backoff: Duration,
) {
    let Job { chunk, callback } = job;

    for attempt in 0..=max_retries {
        match service.annotate(&chunk) {
            Ok(annotated) => {
                archive.record(&chunk, &annotated);
                let tokens = parser::parse(&annotated);
                callback(tokens);
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, attempt, "Annotation attempt failed");
                if attempt >= max_retries {
                    tracing::error!(
                        chunk_chars = chunk.chars().count(),
                        attempts = max_retries + 1,
                        "Annotation abandoned; callback will not fire"
                    );
                    return;
                }
                std::thread::sleep(retry_backoff);
            }
        }
    }
}
