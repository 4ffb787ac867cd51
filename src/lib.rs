//! Glosswork — size-bounded text annotation pipeline.
//!
//! The segmenter cuts input into bounded chunks along paragraph and
//! sentence boundaries, and a single-worker dispatch queue serializes
//! each chunk through the remote annotation service with bounded
//! retries. The parser then recovers `{word, gloss, part-of-speech}`
//! tokens from the annotated output, with every newline preserved as
//! its own token.

pub mod config;
pub mod pipeline;

pub use config::AnnotatorConfig;
pub use pipeline::orchestrator::Annotator;
pub use pipeline::types::{AnnotationService, Token};
pub use pipeline::AnnotateError;
