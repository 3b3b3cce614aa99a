// Sliding-window match search.
//
// Greedy longest-match: grow the lookahead prefix one byte at a time and
// stop at the first length with no occurrence in the window. Among equal
// lengths the right-most (nearest, smallest-offset) occurrence wins; that
// tie-break is part of the output contract, so any faster matcher swapped
// in here has to reproduce it bit-for-bit.
//
// An occurrence may start inside the window and continue past its end into
// the lookahead itself. Those self-overlapping matches are the reason the
// decoder copies byte-by-byte: a run like "aaaa" compresses to a single
// (offset 1, length 3) token.

/// A back-reference candidate found in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Distance in bytes from the cursor back to the match start (>= 1).
    pub offset: usize,
    /// Matched byte count (>= 1; the encoder decides whether it is worth a token).
    pub length: usize,
}

/// Find the longest prefix of `lookahead` that occurs in `window`, up to
/// `max_length` bytes, preferring the occurrence nearest the cursor.
///
/// Returns `None` when the window is empty (start of stream) or not even a
/// single byte matches.
pub fn find_longest_match(window: &[u8], lookahead: &[u8], max_length: usize) -> Option<Match> {
    if window.is_empty() || lookahead.is_empty() {
        return None;
    }
    let max_length = max_length.min(lookahead.len());

    let mut best = None;
    for length in 1..=max_length {
        match rightmost_occurrence(window, lookahead, length) {
            Some(start) => {
                best = Some(Match {
                    offset: window.len() - start,
                    length,
                })
            }
            None => break,
        }
    }
    best
}

/// Right-most start index in `window` from which `length` source bytes equal
/// `lookahead[..length]`, reading past the window end into `lookahead` for
/// self-overlapping candidates.
fn rightmost_occurrence(window: &[u8], lookahead: &[u8], length: usize) -> Option<usize> {
    (0..window.len()).rev().find(|&start| {
        (0..length).all(|k| {
            let j = start + k;
            let source = if j < window.len() {
                window[j]
            } else {
                // Overlap: j - window.len() < k, so this byte was already
                // confirmed equal to the source run; the decoder will have
                // appended it before the copy reaches position k.
                lookahead[j - window.len()]
            };
            source == lookahead[k]
        })
    })
}
