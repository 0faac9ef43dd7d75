//! Splitting documents into chunks on code-point boundaries.
use alloc::vec::Vec;

/// Split `payload` into `parts` chunks of roughly equal code-point count.
///
/// # Panics
///
/// Panics if `parts` is zero.
///
/// ```rust
/// use textmodem::produce_chunks;
///
/// assert_eq!(produce_chunks("[\"foo\",1]", 3), ["[\"f", "oo\"", ",1]"]);
/// ```
#[must_use]
pub fn produce_chunks(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let chunk_len = payload.chars().count().div_ceil(parts).max(1);
    let sizes = core::iter::repeat_n(chunk_len, parts);
    split_by_lengths(payload, sizes)
}

/// Return a sequence of prefixes converging to `payload`.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_prefixes(payload: &str, parts: usize) -> Vec<&str> {
    let mut end = 0;
    produce_chunks(payload, parts)
        .into_iter()
        .map(|chunk| {
            end += chunk.len();
            &payload[..end]
        })
        .collect()
}

/// Split `payload` into consecutive chunks of the given code-point lengths.
///
/// Lengths are clamped to what is left; zero lengths yield empty chunks, and
/// any remainder after the last length becomes a final chunk.
#[must_use]
pub fn split_by_lengths<I>(payload: &str, lengths: I) -> Vec<&str>
where
    I: IntoIterator<Item = usize>,
{
    let mut chunks = Vec::new();
    let mut rest = payload;
    for len in lengths {
        if rest.is_empty() {
            break;
        }
        let at = rest.char_indices().nth(len).map_or(rest.len(), |(i, _)| i);
        let (chunk, tail) = rest.split_at(at);
        chunks.push(chunk);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
