use serde::{Deserialize, Serialize};

use super::AnnotateError;

/// Gloss/part-of-speech value carried by newline tokens, which have no
/// annotation of their own.
pub const NONE_SENTINEL: &str = "none";

/// One unit of parsed annotation output.
///
/// Either a content token (`word` with its gloss and part-of-speech
/// tag) or a newline token (`word` is the newline character itself,
/// gloss and pos are the `"none"` sentinel). Token order is
/// significant: it matches the left-to-right, top-to-bottom order of
/// the annotated text, so a caller can reconstruct line structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The original word, or `"\n"` for a newline token.
    pub word: String,
    /// The gloss attached by the annotation service. May be empty.
    pub gloss: String,
    /// Short alphabetic part-of-speech tag.
    pub pos: String,
}

impl Token {
    /// A content token.
    pub fn content(
        word: impl Into<String>,
        gloss: impl Into<String>,
        pos: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            gloss: gloss.into(),
            pos: pos.into(),
        }
    }

    /// The positional token standing in for one newline of the source.
    pub fn newline() -> Self {
        Self {
            word: "\n".to_string(),
            gloss: NONE_SENTINEL.to_string(),
            pos: NONE_SENTINEL.to_string(),
        }
    }

    pub fn is_newline(&self) -> bool {
        self.word == "\n" && self.gloss == NONE_SENTINEL && self.pos == NONE_SENTINEL
    }
}

/// Completion callback invoked with the tokens parsed from one chunk.
pub type TokenCallback = Box<dyn FnOnce(Vec<Token>) + Send>;

/// One chunk of text paired with its completion callback.
///
/// Owned exclusively by the dispatch queue from submission until the
/// callback fires or the job is abandoned.
pub struct Job {
    pub chunk: String,
    pub callback: TokenCallback,
}

impl Job {
    pub fn new(
        chunk: impl Into<String>,
        callback: impl FnOnce(Vec<Token>) + Send + 'static,
    ) -> Self {
        Self {
            chunk: chunk.into(),
            callback: Box::new(callback),
        }
    }
}

/// The remote annotation service: fixed prompt rules plus one chunk of
/// text in, bracket-annotated text out. Fallible, no latency bound.
pub trait AnnotationService: Send + Sync {
    fn annotate(&self, text: &str) -> Result<String, AnnotateError>;
}
