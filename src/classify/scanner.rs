//! String literal and line comment scanning.
//!
//! Both share the top priority tier, so they are found in a single
//! left-to-right byte scan: whichever opener appears first claims its range,
//! and the scan resumes after it. A `//` inside a string or a `"` inside a
//! comment is never seen as an opener.

use super::token::{Category, Span};
use super::{Pass, PassContext};

/// Find every string literal and line comment in `source`, in order.
pub fn scan_quoted(source: &str) -> Vec<(Span, Category)> {
    let bytes = source.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i);
                found.push((Span::new(i, end), Category::String));
                i = end;
            }
            // An escaped quote outside a string (as in `'\"'`) opens nothing
            b'\\' => i += 2,
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = comment_end(bytes, i);
                found.push((Span::new(i, end), Category::Comment));
                i = end;
            }
            _ => i += 1,
        }
    }

    found
}

/// End offset (exclusive) of the string opened at `open`.
/// Unterminated strings run to end of text.
fn string_end(bytes: &[u8], open: usize) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            // Escapes whatever follows, including a quote or another backslash
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// End offset of the comment opened at `open`: the newline is not included.
fn comment_end(bytes: &[u8], open: usize) -> usize {
    bytes[open..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| open + offset)
}

pub struct QuotedPass;

impl Pass for QuotedPass {
    fn name(&self) -> &'static str {
        "string/comment"
    }

    fn run(&self, cx: &mut PassContext<'_>) -> usize {
        let mut claimed = 0;
        for (span, category) in scan_quoted(cx.source) {
            if cx.claims.claim(span, category) {
                claimed += 1;
            }
        }
        claimed
    }
}
