use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::words::list::WordList;

/// Number of suggestions shown when the caller does not ask for a different amount
pub const DEFAULT_LIMIT: usize = 5;

/// Letters from most to least common in English text
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Ranked suggestions for the current input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub words: Vec<String>,

    /// False when nothing matched the typed prefix and the words only match the active letter
    pub prefix_match: bool,
}

/// Position of a letter in the frequency table. Common letters score low.
pub fn rarity(letter: char) -> usize {
    let letter = letter.to_ascii_lowercase();
    FREQUENCY_ORDER.find(letter).unwrap_or(FREQUENCY_ORDER.len())
}

/// Up to `limit` unused words starting with `active_letter`, shortest first
pub fn suggest(
    word_list: &WordList,
    active_letter: char,
    used_words: &HashSet<String>,
    limit: usize,
) -> Vec<String> {
    let active_letter = active_letter.to_ascii_lowercase();
    let candidates = word_list
        .iter()
        .filter(|word| word.starts_with(active_letter) && !used_words.contains(*word));

    rank(candidates, limit)
}

/// Suggestions narrowed by what the player has typed so far.
///
/// The typed buffer is prefixed with the active letter unless it already starts with it.
/// When the prefix matches nothing, the plain suggestions for the active letter are
/// returned instead so the player still sees a valid play.
pub fn suggest_for_input(
    word_list: &WordList,
    active_letter: Option<char>,
    typed: &str,
    used_words: &HashSet<String>,
    limit: usize,
) -> Suggestions {
    let typed = typed.trim().to_ascii_lowercase();
    let prefix = match active_letter.map(|letter| letter.to_ascii_lowercase()) {
        Some(letter) if !typed.starts_with(letter) => format!("{}{}", letter, typed),
        _ => typed,
    };

    let candidates = word_list
        .iter()
        .filter(|word| word.starts_with(prefix.as_str()) && !used_words.contains(*word));
    let words = rank(candidates, limit);

    if words.is_empty() {
        if let Some(letter) = active_letter {
            debug!("No words match '{}', falling back to '{}'", prefix, letter);
            return Suggestions {
                words: suggest(word_list, letter, used_words, limit),
                prefix_match: false,
            };
        }
    }

    Suggestions {
        words,
        prefix_match: true,
    }
}

fn rank<'a>(candidates: impl Iterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut ranked: Vec<&str> = candidates.collect();
    ranked.sort_unstable_by(|a, b| rank_key(a).cmp(&rank_key(b)));

    debug!("Ranked {} candidates, keeping {}", ranked.len(), limit);

    ranked.into_iter().take(limit).map(str::to_owned).collect()
}

/// Length first, then how rare the second letter is, then alphabetical
fn rank_key(word: &str) -> (usize, usize, &str) {
    let second = word.chars().nth(1).map_or(0, rarity);
    (word.len(), second, word)
}
