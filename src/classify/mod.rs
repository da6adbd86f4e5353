pub mod claims;
pub mod positions;
pub mod scanner;
pub mod token;
pub mod words;

pub use claims::ClaimSet;
pub use positions::{byte_to_utf16, LineCol, LineIndex};
pub use token::{Category, Span, Token};

use crate::lexicon::Lexicon;
use scanner::QuotedPass;
use words::{FunctionCallPass, LexiconPass, MacroPass, NumberPass, Word};

/// State shared by the passes of one classification run
pub struct PassContext<'a> {
    pub source: &'a str,
    pub lexicon: &'a Lexicon,
    pub words: Vec<Word<'a>>,
    pub claims: ClaimSet,
}

/// One priority tier of the classifier.
///
/// A pass may only claim ranges that are still free; earlier passes win.
pub trait Pass {
    fn name(&self) -> &'static str;

    /// Claim ranges for this pass, returning how many were claimed.
    fn run(&self, cx: &mut PassContext<'_>) -> usize;
}

/// Span classifier: runs the passes in fixed priority order.
pub struct Classifier {
    lexicon: Lexicon,
    passes: Vec<Box<dyn Pass + Send + Sync>>,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            passes: vec![
                Box::new(QuotedPass),
                Box::new(LexiconPass::keywords()),
                Box::new(LexiconPass::types()),
                Box::new(LexiconPass::literals()),
                Box::new(NumberPass),
                Box::new(MacroPass),
                Box::new(FunctionCallPass),
            ],
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify `source` into tokens that exactly cover it, in offset order.
    ///
    /// Never fails: unterminated strings, unbalanced brackets and other
    /// in-progress code all produce a best-effort classification.
    pub fn classify<'a>(&self, source: &'a str) -> Vec<Token<'a>> {
        let mut cx = PassContext {
            source,
            lexicon: &self.lexicon,
            words: words::words(source),
            claims: ClaimSet::new(),
        };

        for pass in &self.passes {
            let claimed = pass.run(&mut cx);
            tracing::trace!(pass = pass.name(), claimed, "classifier pass");
        }

        tracing::debug!(bytes = source.len(), claims = cx.claims.len(), "classified");
        cx.claims.into_tokens(source)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Lexicon::rust())
    }
}

/// Classify with the built-in Rust lexicon.
pub fn classify(source: &str) -> Vec<Token<'_>> {
    Classifier::default().classify(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(source: &str) -> Vec<(Category, &str)> {
        classify(source).into_iter().map(|t| (t.category, t.text)).collect()
    }

    fn non_plain(source: &str) -> Vec<(Category, &str)> {
        classified(source)
            .into_iter()
            .filter(|(category, _)| *category != Category::Plain)
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_end_to_end() {
        let source = r#"fn main() { let x: u32 = 42; println!("{}", x); }"#;
        assert_eq!(
            classified(source),
            vec![
                (Category::Keyword, "fn"),
                (Category::Plain, " "),
                (Category::FunctionCall, "main"),
                (Category::Plain, "() { "),
                (Category::Keyword, "let"),
                (Category::Plain, " x: "),
                (Category::Type, "u32"),
                (Category::Plain, " = "),
                (Category::Number, "42"),
                (Category::Plain, "; "),
                (Category::Macro, "println!"),
                (Category::Plain, "("),
                (Category::String, "\"{}\""),
                (Category::Plain, ", x); }"),
            ]
        );
    }

    #[test]
    fn test_keyword_inside_string_and_comment() {
        let source = r#""let x = 1;" // let"#;
        assert_eq!(
            classified(source),
            vec![
                (Category::String, "\"let x = 1;\""),
                (Category::Plain, " "),
                (Category::Comment, "// let"),
            ]
        );
    }

    #[test]
    fn test_whole_word_type() {
        assert_eq!(non_plain("let usizeish = 1;"), vec![
            (Category::Keyword, "let"),
            (Category::Number, "1"),
        ]);
    }

    #[test]
    fn test_keyword_not_inside_identifier() {
        assert!(non_plain("structure").is_empty());
        assert!(non_plain("my_fn").is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(classified("\"unterminated"), vec![(Category::String, "\"unterminated")]);
        assert_eq!(
            classified("let s = \"abc"),
            vec![
                (Category::Keyword, "let"),
                (Category::Plain, " s = "),
                (Category::String, "\"abc"),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_in_char_literal() {
        assert_eq!(non_plain(r#"let q = '\"'; let x = 1;"#), vec![
            (Category::Keyword, "let"),
            (Category::Keyword, "let"),
            (Category::Number, "1"),
        ]);
    }

    #[test]
    fn test_macro_vs_function_call() {
        assert_eq!(non_plain("println!(x)"), vec![(Category::Macro, "println!")]);
        assert_eq!(non_plain("println(x)"), vec![(Category::FunctionCall, "println")]);
    }

    #[test]
    fn test_unknown_macro_is_plain() {
        assert!(non_plain("my_macro!(x)").is_empty());
        assert!(non_plain("eprintln!(x)").is_empty());
    }

    #[test]
    fn test_function_call_needs_lowercase_and_paren() {
        assert_eq!(non_plain("foo(1)"), vec![
            (Category::FunctionCall, "foo"),
            (Category::Number, "1"),
        ]);
        assert!(non_plain("Foo(a)").is_empty());
        assert!(non_plain("foo (a)").is_empty());
    }

    #[test]
    fn test_keyword_before_paren_stays_keyword() {
        assert_eq!(non_plain("if(a)"), vec![(Category::Keyword, "if")]);
        assert_eq!(non_plain("match(a)"), vec![(Category::Keyword, "match")]);
    }

    #[test]
    fn test_type_before_paren_stays_type() {
        assert_eq!(non_plain("Box::new(str(a))"), vec![
            (Category::Type, "Box"),
            (Category::FunctionCall, "new"),
            (Category::Type, "str"),
        ]);
    }

    #[test]
    fn test_literals() {
        assert_eq!(non_plain("Some(true)"), vec![
            (Category::Literal, "Some"),
            (Category::Literal, "true"),
        ]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(non_plain("3.14"), vec![(Category::Number, "3.14")]);
        assert_eq!(non_plain("0..10"), vec![
            (Category::Number, "0"),
            (Category::Number, "10"),
        ]);
        assert!(non_plain("x1").is_empty());
        assert!(non_plain("42u32").is_empty());
        assert!(non_plain("1.5x").is_empty());
    }

    #[test]
    fn test_number_inside_string() {
        assert_eq!(non_plain("\"42\""), vec![(Category::String, "\"42\"")]);
    }

    #[test]
    fn test_comment_swallows_rest_of_line_only() {
        assert_eq!(
            classified("// fn\nfn"),
            vec![
                (Category::Comment, "// fn"),
                (Category::Plain, "\n"),
                (Category::Keyword, "fn"),
            ]
        );
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon {
            keywords: vec!["def".to_string()],
            ..Lexicon::rust()
        };
        let classifier = Classifier::new(lexicon);
        let tokens: Vec<_> = classifier
            .classify("def fn")
            .into_iter()
            .map(|t| (t.category, t.text))
            .collect();
        assert_eq!(tokens, vec![(Category::Keyword, "def"), (Category::Plain, " fn")]);
    }

    #[test]
    fn test_non_ascii_identifiers() {
        assert_eq!(non_plain("let é = naïve(1);"), vec![
            (Category::Keyword, "let"),
            (Category::FunctionCall, "naïve"),
            (Category::Number, "1"),
        ]);
    }
}
