mod ansi;
mod html;
mod validate;

pub use ansi::AnsiRenderer;
pub use html::{escape_attr_into, escape_html, escape_html_into, HtmlRenderer, DEFAULT_CLASS_PREFIX};
pub use validate::check_coverage;

use crate::classify::Token;
use crate::error::RenderError;

/// Renderer trait - turns a classified token list back into text
pub trait Renderer {
    /// Render `tokens`, which must exactly cover `source`.
    ///
    /// Fails only when the token list breaks that invariant.
    fn render(&self, source: &str, tokens: &[Token<'_>]) -> Result<String, RenderError>;
}
