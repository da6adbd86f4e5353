use serde::Serialize;
use std::fmt;

/// Lexical category of a token.
///
/// Variants are declared in priority order, highest first. `String` and
/// `Comment` share the top tier: whichever opens first in the text wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    String,
    Comment,
    Keyword,
    Type,
    Literal,
    Number,
    Macro,
    FunctionCall,
    Plain,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::String => "string",
            Category::Comment => "comment",
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Literal => "literal",
            Category::Number => "number",
            Category::Macro => "macro",
            Category::FunctionCall => "function",
            Category::Plain => "plain",
        }
    }

    /// Style hook suffix, `None` for text that is left unwrapped.
    pub fn class_suffix(&self) -> Option<&'static str> {
        match self {
            Category::Plain => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A classified slice of the source. Borrows the text it was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub category: Category,
    pub span: Span,
    /// The exact source slice, unescaped
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(category: Category, span: Span, text: &'a str) -> Self {
        Self { category, span, text }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn is_plain(&self) -> bool {
        self.category == Category::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(Category::String < Category::Keyword);
        assert!(Category::Keyword < Category::Type);
        assert!(Category::Type < Category::Literal);
        assert!(Category::Literal < Category::Number);
        assert!(Category::Number < Category::Macro);
        assert!(Category::Macro < Category::FunctionCall);
        assert!(Category::FunctionCall < Category::Plain);
    }

    #[test]
    fn test_class_suffix() {
        assert_eq!(Category::FunctionCall.class_suffix(), Some("function"));
        assert_eq!(Category::Plain.class_suffix(), None);
    }

    #[test]
    fn test_serialize_category() {
        let json = serde_json::to_string(&Category::FunctionCall).unwrap();
        assert_eq!(json, "\"function_call\"");
    }
}
