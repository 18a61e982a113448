pub mod list;
pub mod round;
pub mod suggest;

// Re-export common types
pub use list::WordList;
pub use round::{Accepted, RoundState};
pub use suggest::{suggest, suggest_for_input, Suggestions};
