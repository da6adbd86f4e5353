use crate::classify::Token;
use crate::error::{RenderError, RenderErrorKind};

/// Check that `tokens` tile `source` exactly: in order, no gaps, no overlaps,
/// every `text` equal to the slice it claims.
pub fn check_coverage(source: &str, tokens: &[Token<'_>]) -> Result<(), RenderError> {
    let mut cursor = 0;

    for (index, token) in tokens.iter().enumerate() {
        let (start, end) = (token.start(), token.end());

        if start >= end {
            return Err(RenderError::new(RenderErrorKind::EmptyToken, start).at_token(index));
        }
        if end > source.len() || !source.is_char_boundary(start) || !source.is_char_boundary(end) {
            return Err(RenderError::new(RenderErrorKind::OutOfBounds, start).at_token(index));
        }
        if start > cursor {
            return Err(RenderError::new(RenderErrorKind::Gap, cursor).at_token(index));
        }
        if start < cursor {
            return Err(RenderError::new(RenderErrorKind::Overlap, start).at_token(index));
        }
        if &source[start..end] != token.text {
            return Err(RenderError::new(RenderErrorKind::TextMismatch, start).at_token(index));
        }

        cursor = end;
    }

    if cursor != source.len() {
        return Err(RenderError::new(RenderErrorKind::Truncated, cursor));
    }

    Ok(())
}
