use super::token::{Category, Span, Token};
use std::collections::BTreeMap;

/// Ranges already claimed by a pass, keyed by start offset.
///
/// Claims never overlap. Once a range is claimed it cannot be taken by any
/// later pass, which is what keeps keywords out of strings and comments.
#[derive(Debug, Default)]
pub struct ClaimSet {
    claims: BTreeMap<usize, (usize, Category)>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no existing claim intersects `span`.
    pub fn is_free(&self, span: Span) -> bool {
        if span.is_empty() {
            return false;
        }
        // The only claim that can intersect is the last one starting before `span.end`
        match self.claims.range(..span.end).next_back() {
            Some((_, (end, _))) => *end <= span.start,
            None => true,
        }
    }

    /// Claim `span` for `category`. Returns false if any part is taken.
    pub fn claim(&mut self, span: Span, category: Category) -> bool {
        if !self.is_free(span) {
            return false;
        }
        self.claims.insert(span.start, (span.end, category));
        true
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Materialize the claims as tokens, filling every gap with `Plain`.
    pub fn into_tokens(self, source: &str) -> Vec<Token<'_>> {
        let mut tokens = Vec::with_capacity(self.claims.len() * 2 + 1);
        let mut cursor = 0;

        for (start, (end, category)) in self.claims {
            if start > cursor {
                tokens.push(plain(source, cursor, start));
            }
            tokens.push(Token::new(category, Span::new(start, end), &source[start..end]));
            cursor = end;
        }

        if cursor < source.len() {
            tokens.push(plain(source, cursor, source.len()));
        }

        tokens
    }
}

fn plain(source: &str, start: usize, end: usize) -> Token<'_> {
    Token::new(Category::Plain, Span::new(start, end), &source[start..end])
}
