use miette::{Diagnostic, SourceSpan};
use serde::Serialize;
use std::io;
use thiserror::Error;

/// Primary error type for the Last-Letter Helper
#[derive(Error, Debug, Diagnostic)]
pub enum HelperError {
    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(lastletter::config_error))]
    Config(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(lastletter::io_error))]
    Io(#[from] io::Error),

    #[error("Actor system error: {0}")]
    #[diagnostic(code(lastletter::actor_error))]
    Actor(String),

    #[error("Failed to render view: {0}")]
    #[diagnostic(code(lastletter::render_error))]
    Render(#[from] serde_json::Error),
}

/// Word-list loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum WordListError {
    #[error("Failed to read word list: {0}")]
    #[diagnostic(code(lastletter::word_list::load_error))]
    LoadError(#[from] io::Error),

    #[error("Word list {path} is unreadable")]
    #[diagnostic(
        code(lastletter::word_list::unreadable),
        help("fall back to the bundled default list")
    )]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reason codes for a rejected submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    WrongLetter,
    AlreadyUsed,
    Empty,
    NonAlphabetic,
}

/// A submission the round refused. This is an ordinary outcome of play, not a failure.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum InvalidSubmission {
    #[error("Nothing was submitted")]
    #[diagnostic(code(lastletter::submit::empty))]
    Empty,

    #[error("Word contains non-alphabetic characters")]
    #[diagnostic(code(lastletter::submit::non_alphabetic))]
    NonAlphabetic {
        #[source_code]
        word: String,

        #[label("not a letter")]
        span: SourceSpan,
    },

    #[error("Word must start with '{expected}'")]
    #[diagnostic(code(lastletter::submit::wrong_letter))]
    WrongLetter {
        #[source_code]
        word: String,

        expected: char,

        #[label("wrong first letter")]
        span: SourceSpan,
    },

    #[error("Word has been used this round")]
    #[diagnostic(code(lastletter::submit::already_used))]
    AlreadyUsed(String),
}

impl InvalidSubmission {
    pub fn reason(&self) -> RejectReason {
        match self {
            Self::Empty => RejectReason::Empty,
            Self::NonAlphabetic { .. } => RejectReason::NonAlphabetic,
            Self::WrongLetter { .. } => RejectReason::WrongLetter,
            Self::AlreadyUsed(_) => RejectReason::AlreadyUsed,
        }
    }
}

// Re-export error types for convenience
pub use HelperError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
