//! Annotation orchestrator — ties segmentation to the dispatch queue.
//!
//! The public entry point of the pipeline: `process_async` segments the
//! text and fans out one queued job per chunk. All submissions share
//! one worker, so chunks from every caller are annotated in a single
//! global FIFO order.

use std::sync::Arc;

use super::archive::AnnotationArchive;
use super::deepseek::DeepseekClient;
use super::dispatch::DispatchQueue;
use super::segmenter;
use super::types::{AnnotationService, Job, Token};
use crate::config::AnnotatorConfig;

pub struct Annotator {
    queue: DispatchQueue,
    max_chunk_chars: usize,
}

impl Annotator {
    /// Annotator backed by the remote DeepSeek service and the default
    /// archive location.
    pub fn new(config: AnnotatorConfig) -> Self {
        let service = Arc::new(DeepseekClient::new(&config));
        Self::with_service(service, AnnotationArchive::from_env(), config)
    }

    /// Annotator with explicit collaborators, for tests and alternative
    /// backends.
    pub fn with_service(
        service: Arc<dyn AnnotationService>,
        archive: AnnotationArchive,
        config: AnnotatorConfig,
    ) -> Self {
        let queue =
            DispatchQueue::start(service, archive, config.max_retries, config.retry_backoff);
        Self {
            queue,
            max_chunk_chars: config.max_chunk_chars,
        }
    }

    /// Segment `text` and enqueue one annotation job per chunk.
    ///
    /// Returns immediately. The callback fires once per chunk, in chunk
    /// order; callers wanting one result per whole document aggregate
    /// themselves. A chunk whose annotation permanently fails never
    /// invokes the callback.
    pub fn process_async(
        &self,
        text: &str,
        callback: impl Fn(Vec<Token>) + Send + Sync + 'static,
    ) {
        let callback = Arc::new(callback);
        for chunk in segmenter::segment(text, self.max_chunk_chars) {
            let cb = Arc::clone(&callback);
            self.queue.submit(Job::new(chunk, move |tokens| cb(tokens)));
        }
    }
}
