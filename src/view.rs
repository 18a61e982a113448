use serde::Serialize;
use std::fmt;

use crate::error::RejectReason;

/// What the overlay tells the player to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "letter", rename_all = "kebab-case")]
pub enum Hint {
    /// The typed text does not start with the active letter
    StartWith(char),
    /// No unused word starts with the active letter
    NoWordsLeft,
    /// Nothing to suggest before the first word
    TypeToStart,
    /// Next letter of the top suggestion
    NextLetter(char),
    /// The typed text already spells the top suggestion
    PressEnter,
}

impl Hint {
    pub fn for_input(active_letter: Option<char>, typed: &str, suggestions: &[String]) -> Self {
        let typed = typed.to_ascii_lowercase();

        if let Some(letter) = active_letter {
            if !typed.is_empty() && !typed.starts_with(letter) {
                return Self::StartWith(letter);
            }
        }

        let Some(best) = suggestions.first() else {
            return match active_letter {
                Some(_) => Self::NoWordsLeft,
                None => Self::TypeToStart,
            };
        };

        match best.chars().nth(typed.chars().count()) {
            Some(next) => Self::NextLetter(next),
            None => Self::PressEnter,
        }
    }
}

/// Snapshot of everything the overlay displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub active_letter: Option<char>,
    pub typed: String,
    pub suggestions: Vec<String>,
    pub prefix_match: bool,
    pub hint: Hint,
    pub score: u32,
    pub longest_word: Option<String>,
    pub rejection: Option<RejectReason>,
    pub visible: bool,
}

impl fmt::Display for OverlayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self
            .active_letter
            .map_or_else(|| "?".to_string(), |c| c.to_string());
        writeln!(
            f,
            "Start letter: {} | Score: {} | Longest: {}",
            letter,
            self.score,
            self.longest_word.as_deref().map_or(0, str::len)
        )?;

        let typed = if self.typed.is_empty() {
            "(empty)"
        } else {
            self.typed.as_str()
        };
        writeln!(f, "typed: {}", typed)?;

        if self.suggestions.is_empty() {
            writeln!(f, "  no matches")?;
        }
        for (i, word) in self.suggestions.iter().enumerate() {
            let marker = if i == 0 { '>' } else { ' ' };
            writeln!(f, "  {} {}", marker, word)?;
        }
        if !self.prefix_match {
            writeln!(f, "  (nothing starts with '{}')", self.typed)?;
        }

        match self.hint {
            Hint::StartWith(letter) => writeln!(f, "hint: start with '{}'", letter)?,
            Hint::NoWordsLeft => writeln!(f, "hint: no valid words left")?,
            Hint::TypeToStart => writeln!(f, "hint: type to start")?,
            Hint::NextLetter(next) => writeln!(f, "hint: {}", next)?,
            Hint::PressEnter => writeln!(f, "hint: press enter")?,
        }

        if let Some(reason) = self.rejection {
            let reason = match reason {
                RejectReason::WrongLetter => "wrong starting letter",
                RejectReason::AlreadyUsed => "already used this round",
                RejectReason::Empty => "nothing typed",
                RejectReason::NonAlphabetic => "letters only",
            };
            writeln!(f, "rejected: {}", reason)?;
        }

        Ok(())
    }
}
