use super::validate::check_coverage;
use super::Renderer;
use crate::classify::{Category, Token};
use crate::error::RenderError;

// 256-color ANSI codes approximating the JetBrains New UI dark theme
const STRING: &str = "\x1b[38;5;72m"; // #6aab73
const COMMENT: &str = "\x1b[38;5;243m"; // #7a7e85
const KEYWORD: &str = "\x1b[38;5;173m"; // #ce8e6d
const TYPE: &str = "\x1b[38;5;180m"; // #d5b778
const LITERAL: &str = "\x1b[38;5;140m"; // #a48fd1
const NUMBER: &str = "\x1b[38;5;73m"; // #2cabb8
const MACRO: &str = "\x1b[38;5;110m"; // #8cb4d9
const FUNCTION: &str = "\x1b[38;5;103m"; // #8888c5
const RESET: &str = "\x1b[0m";

fn color(category: Category) -> Option<&'static str> {
    match category {
        Category::String => Some(STRING),
        Category::Comment => Some(COMMENT),
        Category::Keyword => Some(KEYWORD),
        Category::Type => Some(TYPE),
        Category::Literal => Some(LITERAL),
        Category::Number => Some(NUMBER),
        Category::Macro => Some(MACRO),
        Category::FunctionCall => Some(FUNCTION),
        Category::Plain => None,
    }
}

/// Renders tokens with ANSI colors for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn render(&self, source: &str, tokens: &[Token<'_>]) -> Result<String, RenderError> {
        check_coverage(source, tokens)?;

        let mut out = String::with_capacity(source.len() * 2);
        for token in tokens {
            match color(token.category) {
                Some(code) => {
                    out.push_str(code);
                    out.push_str(token.text);
                    out.push_str(RESET);
                }
                None => out.push_str(token.text),
            }
        }
        Ok(out)
    }
}
