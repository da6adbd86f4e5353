//! Category lexicons: the word tables the classifier matches against.
//!
//! The tables are plain data. Swapping them retargets the classifier to a
//! different language without touching the passes.

use crate::error::LexiconError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Rust keywords.
const KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "const", "if", "else", "match", "for", "while", "loop",
    "return", "break", "continue", "struct", "enum", "impl", "trait", "pub",
    "use", "mod", "crate", "self", "super", "where", "async", "await", "move",
    "ref", "static", "type", "unsafe", "extern", "dyn", "as", "in",
];

/// Primitive and common container types.
const TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize",
    "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64", "bool", "char", "str",
    "String", "Vec", "Option", "Result", "Box", "Rc", "Arc", "Cell", "RefCell",
    "HashMap", "HashSet", "BTreeMap", "BTreeSet",
];

/// Boolean, option and result markers.
const LITERALS: &[&str] = &["true", "false", "None", "Some", "Ok", "Err"];

/// Macros highlighted when followed by `!`.
const MACROS: &[&str] = &[
    "println", "print", "format", "vec", "panic", "assert", "assert_eq",
    "assert_ne", "debug_assert", "debug_assert_eq", "todo", "unimplemented",
    "unreachable", "include", "include_str", "include_bytes", "env", "concat",
    "stringify", "cfg", "line", "column", "file", "module_path",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Word tables for one language.
///
/// Fields missing from a JSON lexicon fall back to the Rust tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub keywords: Vec<String>,
    pub types: Vec<String>,
    pub literals: Vec<String>,
    pub macros: Vec<String>,
}

impl Lexicon {
    /// The built-in Rust tables.
    pub fn rust() -> Self {
        Self {
            keywords: owned(KEYWORDS),
            types: owned(TYPES),
            literals: owned(LITERALS),
            macros: owned(MACROS),
        }
    }

    /// Parse a lexicon from JSON, e.g. `{"keywords": ["def", "class"]}`.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let json = fs::read_to_string(path).map_err(|err| LexiconError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::from_json_str(&json)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.iter().any(|t| t == word)
    }

    pub fn is_literal(&self, word: &str) -> bool {
        self.literals.iter().any(|l| l == word)
    }

    pub fn is_macro(&self, word: &str) -> bool {
        self.macros.iter().any(|m| m == word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_tables() {
        let lexicon = Lexicon::rust();
        assert!(lexicon.is_keyword("fn"));
        assert!(lexicon.is_type("usize"));
        assert!(lexicon.is_literal("None"));
        assert!(lexicon.is_macro("assert_eq"));
        assert!(!lexicon.is_keyword("structure"));
        assert!(!lexicon.is_macro("eprintln"));
    }

    #[test]
    fn test_json_partial_override() {
        let lexicon = Lexicon::from_json_str(r#"{"keywords": ["def", "class"]}"#).unwrap();
        assert!(lexicon.is_keyword("def"));
        assert!(!lexicon.is_keyword("fn"));
        // Untouched tables keep the Rust defaults
        assert!(lexicon.is_type("u32"));
        assert!(lexicon.is_macro("println"));
    }

    #[test]
    fn test_json_error() {
        let err = Lexicon::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, LexiconError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Lexicon::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
