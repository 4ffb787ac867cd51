//! Bracketed-annotation parser.
//!
//! Recovers `{word, gloss, pos}` tokens from the annotation service's
//! output. The grammar is `word "[" gloss pos "]"`: `word` is the run
//! of bracket-free characters before the `[`, `gloss` is a bracket-free
//! run, `pos` a trailing run of ASCII letters. Every newline in the
//! input becomes its own positional token, so the caller can
//! reconstruct line structure exactly. Fragments that do not satisfy
//! the grammar are skipped; the output is best-effort structured data
//! recovered from free text.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Token;

static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\[\]]+?)\[([^\[\]]*?)([A-Za-z]+)\]").expect("valid regex"));

/// Parse annotated text into an ordered token sequence.
///
/// Total over any input: text without a single valid annotation yields
/// only its newline tokens.
pub fn parse(annotated: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for segment in split_keep_newlines(annotated) {
        if segment == "\n" {
            tokens.push(Token::newline());
            continue;
        }
        for caps in ANNOTATION.captures_iter(segment) {
            let word = &caps[1];
            if word.is_empty() {
                continue;
            }
            let gloss_raw = &caps[2];
            // An all-whitespace gloss marks a deliberate filler-word
            // annotation and is kept verbatim; otherwise trailing
            // whitespace separating gloss from pos is dropped.
            let gloss = if gloss_raw.trim().is_empty() {
                gloss_raw
            } else {
                gloss_raw.trim_end()
            };
            tokens.push(Token::content(word, gloss, &caps[3]));
        }
    }
    tokens
}

/// Split on newlines, keeping each `'\n'` as its own segment.
fn split_keep_newlines(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c == '\n' {
            if i > start {
                segments.push(&text[start..i]);
            }
            segments.push(&text[i..i + 1]);
            start = i + 1;
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}
