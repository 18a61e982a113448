pub mod actors;
pub mod config;
pub mod error;
pub mod session;
pub mod terminal;
pub mod view;
pub mod words;

// Re-export error types for convenience
pub use error::{Error, InvalidSubmission, RejectReason, Result, WordListError};

// Core types used by any UI in front of the helper
pub use session::{Key, OverlaySession};
pub use view::{Hint, OverlayView};
pub use words::{suggest, suggest_for_input, RoundState, Suggestions, WordList};
