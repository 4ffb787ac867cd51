pub mod archive;
pub mod deepseek;
pub mod dispatch;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod segmenter;
pub mod types;

pub use archive::*;
pub use deepseek::*;
pub use dispatch::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use segmenter::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("Annotation service unreachable at {0}")]
    Connection(String),

    #[error("Annotation service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Response contained no annotated text")]
    MissingContent,
}
