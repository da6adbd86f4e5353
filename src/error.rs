use std::fmt;
use std::io;
use std::path::PathBuf;

/// Kind of token-list inconsistency found by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    /// A token starts after the previous one ended
    Gap,
    /// A token starts before the previous one ended
    Overlap,
    /// A token with `start >= end`
    EmptyToken,
    /// A token range outside the source or off a char boundary
    OutOfBounds,
    /// A token's `text` differs from the source slice it claims
    TextMismatch,
    /// The tokens stop before the end of the source
    Truncated,
}

impl RenderErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderErrorKind::Gap => "Gap between tokens",
            RenderErrorKind::Overlap => "Overlapping tokens",
            RenderErrorKind::EmptyToken => "Empty token",
            RenderErrorKind::OutOfBounds => "Token out of bounds",
            RenderErrorKind::TextMismatch => "Token text mismatch",
            RenderErrorKind::Truncated => "Tokens do not reach end of source",
        }
    }
}

/// A token list that breaks the coverage invariant.
///
/// The classifier never produces one; seeing this means a classifier bug,
/// not bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub kind: RenderErrorKind,
    /// Byte offset where the inconsistency was detected
    pub offset: usize,
    /// Index of the offending token, if any
    pub token_index: Option<usize>,
}

impl RenderError {
    pub fn new(kind: RenderErrorKind, offset: usize) -> Self {
        Self { kind, offset, token_index: None }
    }

    pub fn at_token(mut self, index: usize) -> Self {
        self.token_index = Some(index);
        self
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal consistency fault: {} at byte {}", self.kind.as_str(), self.offset)?;
        if let Some(index) = self.token_index {
            write!(f, " (token {})", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for RenderError {}

/// Error loading a lexicon
#[derive(Debug)]
pub enum LexiconError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
}

impl From<serde_json::Error> for LexiconError {
    fn from(err: serde_json::Error) -> Self {
        LexiconError::Json(err)
    }
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Io { path, source } => {
                write!(f, "cannot read lexicon {}: {}", path.display(), source)
            }
            LexiconError::Json(err) => write!(f, "invalid lexicon: {}", err),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexiconError::Io { source, .. } => Some(source),
            LexiconError::Json(err) => Some(err),
        }
    }
}

/// Any error surfaced by the command-line tool
#[derive(Debug)]
pub enum Error {
    Lexicon(LexiconError),
    Render(RenderError),
    Io { path: Option<PathBuf>, source: io::Error },
    Json(serde_json::Error),
    Usage(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: Some(path.into()), source }
    }
}

impl From<LexiconError> for Error {
    fn from(err: LexiconError) -> Self {
        Error::Lexicon(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Render(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io { path: None, source: err }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lexicon(err) => write!(f, "{}", err),
            Error::Render(err) => write!(f, "{}", err),
            Error::Io { path: Some(path), source } => write!(f, "{}: {}", path.display(), source),
            Error::Io { path: None, source } => write!(f, "{}", source),
            Error::Json(err) => write!(f, "invalid JSON: {}", err),
            Error::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}
