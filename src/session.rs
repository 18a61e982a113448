use tracing::{debug, info};

use crate::error::InvalidSubmission;
use crate::view::{Hint, OverlayView};
use crate::words::{suggest_for_input, RoundState, WordList};

/// A keystroke or hotkey forwarded by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
    ToggleVisibility,
    NewRound,
    Quit,
}

/// Typing buffer and round state behind one overlay
pub struct OverlaySession {
    word_list: WordList,
    round: RoundState,
    buffer: String,
    limit: usize,
    visible: bool,
    quit: bool,

    /// Last rejected submission, shown until the next key
    rejection: Option<InvalidSubmission>,
}

impl OverlaySession {
    pub fn new(word_list: WordList, limit: usize) -> Self {
        Self {
            word_list,
            round: RoundState::new(),
            buffer: String::new(),
            limit,
            visible: true,
            quit: false,
            rejection: None,
        }
    }

    /// Apply one key. Returns the new view, or `None` while the overlay is hidden.
    pub fn handle_key(&mut self, key: Key) -> Option<OverlayView> {
        if self.quit {
            return None;
        }

        debug!("Handling key {:?}", key);

        match key {
            Key::Quit => {
                info!("Quitting overlay session");
                self.quit = true;
                return None;
            }
            Key::ToggleVisibility => {
                self.visible = !self.visible;
                info!("Overlay {}", if self.visible { "shown" } else { "hidden" });
            }
            Key::NewRound => {
                self.round.reset();
                self.buffer.clear();
                self.rejection = None;
            }
            // Typing only reaches a visible overlay
            Key::Letter(_) | Key::Backspace | Key::Enter if !self.visible => return None,
            Key::Letter(c) => {
                self.rejection = None;
                if c.is_ascii_alphabetic() {
                    self.buffer.push(c.to_ascii_lowercase());
                }
            }
            Key::Backspace => {
                self.rejection = None;
                self.buffer.pop();
            }
            Key::Enter => self.submit_buffer(),
        }

        self.visible.then(|| self.view())
    }

    fn submit_buffer(&mut self) {
        match self.round.submit(&self.buffer) {
            Ok(accepted) => {
                debug!(
                    "Session took '{}' as word {}, buffer now '{}'",
                    accepted.word, accepted.score, accepted.next_letter
                );
                self.rejection = None;
                self.buffer = accepted.next_letter.to_string();
            }
            Err(rejection) => {
                debug!("Rejected '{}': {}", self.buffer, rejection);
                self.buffer = self
                    .round
                    .current_letter()
                    .map(String::from)
                    .unwrap_or_default();
                self.rejection = Some(rejection);
            }
        }
    }

    pub fn view(&self) -> OverlayView {
        let active_letter = self.round.current_letter();
        let suggestions = suggest_for_input(
            &self.word_list,
            active_letter,
            &self.buffer,
            self.round.used_words(),
            self.limit,
        );
        let hint = Hint::for_input(active_letter, &self.buffer, &suggestions.words);

        OverlayView {
            active_letter,
            typed: self.buffer.clone(),
            suggestions: suggestions.words,
            prefix_match: suggestions.prefix_match,
            hint,
            score: self.round.score(),
            longest_word: self.round.longest_word().map(str::to_owned),
            rejection: self.rejection.as_ref().map(InvalidSubmission::reason),
            visible: self.visible,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    pub fn typed(&self) -> &str {
        &self.buffer
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }
}
