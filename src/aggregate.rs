//! Merging of collected recognition results into one transcript.

use crate::stt::engine::RecognitionResult;

/// Join the text of every result with a single space, in order.
///
/// No trimming or collapsing: a result with empty text contributes an empty
/// segment, so its separators survive in the output. Downstream consumers
/// rely on the join being byte-for-byte reproducible, quirks included.
pub fn join_texts(results: &[RecognitionResult]) -> String {
    results
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
