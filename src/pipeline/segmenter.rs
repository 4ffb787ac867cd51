//! Size-bounded text segmentation.
//!
//! Splits input into chunks no longer than a maximum, preferring
//! paragraph boundaries and degrading to sentence boundaries only when
//! a single paragraph overflows the limit. Chunk order equals source
//! order, and sizes are measured in characters (Unicode scalar
//! values), not bytes.

/// Sentence-terminal punctuation. The terminator stays attached to the
/// sentence it ends.
const SENTENCE_TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Each paragraph is carried with a single trailing newline; a
/// paragraph that alone exceeds the limit is degraded to sentence-level
/// accumulation. Total over any input; empty text yields no chunks.
///
/// Known limitation: one sentence longer than `max_chars` is emitted
/// as an oversized chunk rather than split further.
pub fn segment(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buf = String::new();
    let mut buf_len = 0usize;

    let paragraphs: Vec<&str> = text.split('\n').collect();
    let last = paragraphs.len() - 1;

    for (idx, para) in paragraphs.iter().enumerate() {
        // A terminal newline yields one empty final paragraph; it has
        // no content and must not become a spurious chunk.
        if idx == last && para.is_empty() {
            continue;
        }

        let block_len = char_len(para) + 1;
        if buf_len + block_len <= max_chars {
            buf.push_str(para);
            buf.push('\n');
            buf_len += block_len;
        } else if block_len > max_chars {
            // Paragraph alone overflows: flush, then accumulate its
            // sentences one at a time.
            if !buf.is_empty() {
                chunks.push(std::mem::take(&mut buf));
                buf_len = 0;
            }
            for sent in split_sentences(para) {
                let sent = sent.trim();
                if sent.is_empty() {
                    continue;
                }
                let sent_len = char_len(sent);
                if buf_len + sent_len > max_chars {
                    if !buf.is_empty() {
                        chunks.push(std::mem::take(&mut buf));
                    }
                    buf.push_str(sent);
                    buf_len = sent_len;
                } else {
                    buf.push_str(sent);
                    buf_len += sent_len;
                }
            }
            // Reattach the paragraph separator.
            if buf_len + 1 <= max_chars {
                buf.push('\n');
                buf_len += 1;
            } else {
                chunks.push(std::mem::take(&mut buf));
                buf.push('\n');
                buf_len = 1;
            }
        } else {
            // Block fits on its own but not combined: start a new chunk.
            if !buf.is_empty() {
                chunks.push(std::mem::take(&mut buf));
            }
            buf.push_str(para);
            buf.push('\n');
            buf_len = block_len;
        }
    }

    if !buf.is_empty() {
        chunks.push(buf);
    }
    chunks
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split after sentence-terminal punctuation, keeping each terminator
/// attached to the sentence it ends.
fn split_sentences(para: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for (i, c) in para.char_indices() {
        if SENTENCE_TERMINATORS.contains(&c) {
            let end = i + c.len_utf8();
            sentences.push(&para[start..end]);
            start = end;
        }
    }
    if start < para.len() {
        sentences.push(&para[start..]);
    }
    sentences
}
