//! Syntax highlighting for a live Rust editor.
//!
//! Source text goes through two pure steps: the [`Classifier`] splits it into
//! non-overlapping classified tokens, and a [`Renderer`] turns those tokens
//! into markup. Nothing is kept between calls, so the editor simply calls
//! [`Highlighter::highlight`] with the whole buffer on every change.

pub mod classify;
pub mod error;
pub mod lexicon;
pub mod render;
pub mod response;
pub mod worker;

pub use classify::{classify, Category, Classifier, Span, Token};
pub use error::{Error, LexiconError, RenderError, RenderErrorKind};
pub use lexicon::Lexicon;
pub use render::{AnsiRenderer, HtmlRenderer, Renderer};
pub use worker::{HighlightWorker, Highlighted};

use classify::{byte_to_utf16, LineIndex};
use serde::Serialize;

/// Configuration for highlighting.
#[derive(Debug, Clone)]
pub struct Options {
    /// Word tables (default: Rust)
    pub lexicon: Lexicon,
    /// Prefix for the category class names (default: "hl-")
    pub class_prefix: String,
    /// Append a newline after the rendered markup (default: true)
    pub trailing_newline: bool,
}

impl Default for Options {
    fn default() -> Self {
        let renderer = HtmlRenderer::default();
        Self {
            lexicon: Lexicon::rust(),
            class_prefix: renderer.class_prefix,
            trailing_newline: renderer.trailing_newline,
        }
    }
}

/// Classifier and HTML renderer configured together.
pub struct Highlighter {
    classifier: Classifier,
    renderer: HtmlRenderer,
}

impl Highlighter {
    pub fn new(options: Options) -> Self {
        Self {
            classifier: Classifier::new(options.lexicon),
            renderer: HtmlRenderer {
                class_prefix: options.class_prefix,
                trailing_newline: options.trailing_newline,
            },
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn classify<'a>(&self, source: &'a str) -> Vec<Token<'a>> {
        self.classifier.classify(source)
    }

    /// Classify and render `source` as HTML.
    pub fn highlight(&self, source: &str) -> String {
        let tokens = self.classifier.classify(source);
        match self.renderer.render(source, &tokens) {
            Ok(html) => html,
            Err(err) => {
                // Classifier output always covers the source; fall back to escaped text
                tracing::error!(error = %err, "classifier produced an inconsistent token list");
                let mut html = render::escape_html(source);
                if self.renderer.trailing_newline {
                    html.push('\n');
                }
                html
            }
        }
    }

    /// Classify and render with any renderer.
    pub fn render_with<R: Renderer>(&self, source: &str, renderer: &R) -> Result<String, RenderError> {
        renderer.render(source, &self.classifier.classify(source))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Highlight `source` with the default Rust configuration.
pub fn highlight(source: &str) -> String {
    Highlighter::default().highlight(source)
}

/// Decode raw file or stdin bytes for highlighting.
///
/// Invalid UTF-8 sequences become U+FFFD so a stray byte degrades the
/// highlight instead of rejecting the whole buffer.
pub fn source_from_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!(valid_up_to = err.utf8_error().valid_up_to(), "source is not valid UTF-8");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// A token with editor-facing positions, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport<'a> {
    pub category: Category,
    pub start: usize,
    pub end: usize,
    /// UTF-16 offsets, as browser editors address text
    pub utf16_start: usize,
    pub utf16_end: usize,
    /// 0-indexed line and column (in chars) of the token start
    pub line: usize,
    pub col: usize,
    pub text: &'a str,
}

/// Attach UTF-16 offsets and line/column positions to `tokens`.
pub fn token_reports<'a>(source: &'a str, tokens: &[Token<'a>]) -> Vec<TokenReport<'a>> {
    let index = LineIndex::new(source);
    tokens
        .iter()
        .map(|token| {
            let position = index.line_col(token.start());
            TokenReport {
                category: token.category,
                start: token.start(),
                end: token.end(),
                utf16_start: byte_to_utf16(source, token.start()),
                utf16_end: byte_to_utf16(source, token.end()),
                line: position.line,
                col: position.col,
                text: token.text,
            }
        })
        .collect()
}
