use miette::SourceSpan;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::error::InvalidSubmission;

/// An accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,

    /// The letter the next word has to start with
    pub next_letter: char,

    pub score: u32,
}

/// State of one round, from reset to reset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundState {
    /// Letter the next word must begin with, unset until the first word
    active_letter: Option<char>,

    used_words: HashSet<String>,

    score: u32,

    longest_word: Option<String>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a word against the round rules and record it:
    /// 1. Not empty
    /// 2. Letters only
    /// 3. Starts with the active letter, once there is one
    /// 4. Not used earlier this round
    ///
    /// A rejected word leaves the round untouched.
    pub fn submit(&mut self, word: &str) -> Result<Accepted, InvalidSubmission> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(InvalidSubmission::Empty);
        }

        // Checked before lowercasing, some non-ASCII letters lowercase to ASCII ones
        if let Some((pos, bad)) = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(InvalidSubmission::NonAlphabetic {
                span: SourceSpan::from((pos, bad.len_utf8())),
                word: trimmed.to_string(),
            });
        }

        let word = trimmed.to_ascii_lowercase();
        let Some(last) = word.chars().last() else {
            return Err(InvalidSubmission::Empty);
        };

        if let Some(expected) = self.active_letter {
            if !word.starts_with(expected) {
                return Err(InvalidSubmission::WrongLetter {
                    span: SourceSpan::from((0, 1)),
                    word,
                    expected,
                });
            }
        }

        if self.used_words.contains(&word) {
            return Err(InvalidSubmission::AlreadyUsed(word));
        }

        // Valid word - record it
        self.score += 1;
        self.active_letter = Some(last);

        let is_longest = self
            .longest_word
            .as_ref()
            .map_or(true, |longest| word.len() > longest.len());
        if is_longest {
            debug!("New longest word: '{}'", word);
            self.longest_word = Some(word.clone());
        }

        self.used_words.insert(word.clone());

        info!(
            "Accepted '{}' (score {}), next word starts with '{}'",
            word, self.score, last
        );

        Ok(Accepted {
            word,
            next_letter: last,
            score: self.score,
        })
    }

    /// Reset the round. The word list lives elsewhere and is kept.
    pub fn reset(&mut self) {
        self.active_letter = None;
        self.used_words.clear();
        self.score = 0;
        self.longest_word = None;

        info!("Round state has been reset");
    }

    pub fn current_letter(&self) -> Option<char> {
        self.active_letter
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn longest_word(&self) -> Option<&str> {
        self.longest_word.as_deref()
    }
}
