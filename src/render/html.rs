use super::validate::check_coverage;
use super::Renderer;
use crate::classify::Token;
use crate::error::RenderError;

/// Append `text` to `out` with `&`, `<` and `>` escaped.
pub fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Append `text` to `out` escaped for a double-quoted attribute value.
pub fn escape_attr_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => escape_html_into(c.encode_utf8(&mut [0; 4]), out),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}

pub const DEFAULT_CLASS_PREFIX: &str = "hl-";

/// Renders tokens as HTML: each classified token becomes
/// `<span class="hl-keyword">…</span>`, plain text is only escaped.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Prepended to the category name to form the class, e.g. `hl-`
    pub class_prefix: String,
    /// Append `\n` so a caret after the last character has a line to sit on
    pub trailing_newline: bool,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            trailing_newline: true,
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, source: &str, tokens: &[Token<'_>]) -> Result<String, RenderError> {
        check_coverage(source, tokens)?;

        let mut out = String::with_capacity(source.len() * 2);
        for token in tokens {
            // Escaping is applied to the raw slice only, never to emitted markup
            match token.category.class_suffix() {
                Some(suffix) => {
                    out.push_str("<span class=\"");
                    escape_attr_into(&self.class_prefix, &mut out);
                    out.push_str(suffix);
                    out.push_str("\">");
                    escape_html_into(token.text, &mut out);
                    out.push_str("</span>");
                }
                None => escape_html_into(token.text, &mut out),
            }
        }

        if self.trailing_newline {
            out.push('\n');
        }
        Ok(out)
    }
}
