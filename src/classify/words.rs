//! Whole-word passes: lexicon lookups, numbers, macros and function calls.

use super::token::{Category, Span};
use super::{Pass, PassContext};
use crate::lexicon::Lexicon;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Digits with an optional fractional part; boundaries are checked by hand
    static ref NUMBER: Regex = Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap();
}

/// Letters, digits and underscore. Anything else ends a word.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A maximal run of identifier characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub span: Span,
    pub text: &'a str,
}

impl<'a> Word<'a> {
    /// The character right after the word, if any.
    pub fn next_char(&self, source: &str) -> Option<char> {
        source[self.span.end..].chars().next()
    }
}

/// Split `source` into maximal identifier runs. Every word is a whole word by
/// construction: it is never adjacent to another identifier character.
pub fn words(source: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in source.char_indices() {
        match (is_ident_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                words.push(Word { span: Span::new(s, i), text: &source[s..i] });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(Word { span: Span::new(s, source.len()), text: &source[s..] });
    }

    words
}

/// Claims every unclaimed word found in one lexicon table.
pub struct LexiconPass {
    category: Category,
    name: &'static str,
    matches: fn(&Lexicon, &str) -> bool,
}

impl LexiconPass {
    pub fn keywords() -> Self {
        Self { category: Category::Keyword, name: "keyword", matches: Lexicon::is_keyword }
    }

    pub fn types() -> Self {
        Self { category: Category::Type, name: "type", matches: Lexicon::is_type }
    }

    pub fn literals() -> Self {
        Self { category: Category::Literal, name: "literal", matches: Lexicon::is_literal }
    }
}

impl Pass for LexiconPass {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, cx: &mut PassContext<'_>) -> usize {
        let mut claimed = 0;
        for word in &cx.words {
            if (self.matches)(cx.lexicon, word.text) && cx.claims.claim(word.span, self.category) {
                claimed += 1;
            }
        }
        claimed
    }
}

/// Decimal numbers not touching an identifier character on either side.
/// `42u32` and `1.5x` are rejected outright rather than split.
pub struct NumberPass;

impl Pass for NumberPass {
    fn name(&self) -> &'static str {
        "number"
    }

    fn run(&self, cx: &mut PassContext<'_>) -> usize {
        let source = cx.source;
        let mut claimed = 0;

        for m in NUMBER.find_iter(source) {
            let before = source[..m.start()].chars().next_back();
            let after = source[m.end()..].chars().next();
            if before.is_some_and(is_ident_char) || after.is_some_and(is_ident_char) {
                continue;
            }
            if cx.claims.claim(Span::new(m.start(), m.end()), Category::Number) {
                claimed += 1;
            }
        }

        claimed
    }
}

/// A macro-lexicon word immediately followed by `!`. The `!` is part of the token.
pub struct MacroPass;

impl Pass for MacroPass {
    fn name(&self) -> &'static str {
        "macro"
    }

    fn run(&self, cx: &mut PassContext<'_>) -> usize {
        let mut claimed = 0;
        for word in &cx.words {
            if word.next_char(cx.source) != Some('!') || !cx.lexicon.is_macro(word.text) {
                continue;
            }
            let span = Span::new(word.span.start, word.span.end + 1);
            if cx.claims.claim(span, Category::Macro) {
                claimed += 1;
            }
        }
        claimed
    }
}

/// A lowercase-leading identifier immediately followed by `(`.
pub struct FunctionCallPass;

impl FunctionCallPass {
    fn is_candidate(word: &Word<'_>) -> bool {
        word.text
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase() || c == '_')
    }
}

impl Pass for FunctionCallPass {
    fn name(&self) -> &'static str {
        "function call"
    }

    fn run(&self, cx: &mut PassContext<'_>) -> usize {
        let mut claimed = 0;
        for word in &cx.words {
            if !Self::is_candidate(word) || word.next_char(cx.source) != Some('(') {
                continue;
            }
            if cx.lexicon.is_keyword(word.text) || cx.lexicon.is_type(word.text) {
                continue;
            }
            if cx.claims.claim(word.span, Category::FunctionCall) {
                claimed += 1;
            }
        }
        claimed
    }
}
