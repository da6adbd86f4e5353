//! Position conversion utilities.
//!
//! Tokens carry byte offsets. Browser-hosted editors address text in UTF-16
//! code units and gutters count lines and columns, so these helpers convert
//! at output time.

/// Convert a byte offset to a UTF-16 offset.
///
/// Offsets past the end are clamped to the length of `source`.
pub fn byte_to_utf16(source: &str, byte_offset: usize) -> usize {
    let byte_offset = byte_offset.min(source.len());
    source[..byte_offset].encode_utf16().count()
}

/// Line and column of a byte offset (both 0-indexed, column in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

/// Byte offsets of every line start, for repeated lookups over one source.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { source, line_starts }
    }

    /// Number of lines as an editor gutter counts them (an empty text has one).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_col(&self, byte_offset: usize) -> LineCol {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= byte_offset) - 1;
        let col = self.source[self.line_starts[line]..byte_offset].chars().count();
        LineCol { line, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        let source = "hello world";
        assert_eq!(byte_to_utf16(source, 0), 0);
        assert_eq!(byte_to_utf16(source, 5), 5);
        assert_eq!(byte_to_utf16(source, 11), 11);
    }

    #[test]
    fn test_emoji() {
        let source = "let s = \"👋\";";
        // 👋 is 4 bytes but 2 UTF-16 code units
        assert_eq!(byte_to_utf16(source, 9), 9);
        assert_eq!(byte_to_utf16(source, 13), 11);
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(byte_to_utf16("fn", 100), 2);
    }

    #[test]
    fn test_line_col() {
        let source = "fn main() {\n    let é = 1;\n}";
        let index = LineIndex::new(source);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(0), LineCol { line: 0, col: 0 });
        assert_eq!(index.line_col(3), LineCol { line: 0, col: 3 });
        // "let" on the second line
        assert_eq!(index.line_col(16), LineCol { line: 1, col: 4 });
        // after the two-byte é
        assert_eq!(index.line_col(22), LineCol { line: 1, col: 9 });
        assert_eq!(index.line_col(source.len()), LineCol { line: 2, col: 1 });
    }

    #[test]
    fn test_line_count_trailing_newline() {
        assert_eq!(LineIndex::new("").line_count(), 1);
        assert_eq!(LineIndex::new("a\n").line_count(), 2);
    }
}
