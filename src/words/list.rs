use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::{info, warn};

use crate::error::WordListError;

/// Default list compiled into the binary, used when no external list can be read
pub const BUNDLED_WORDS: &str = include_str!("../../data/default_words.txt");

/// An immutable set of lowercase ASCII words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Read a newline-delimited list. Lines that are empty or not purely alphabetic are dropped.
    pub fn load<R: BufRead>(mut reader: R) -> Result<Self, WordListError> {
        let mut words = HashSet::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            // Non UTF-8 bytes become replacement characters and fail the alphabetic check
            if let Some(word) = normalize(&String::from_utf8_lossy(&line)) {
                words.insert(word);
            }
        }

        Ok(Self { words })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();

        info!("Loading word list from {}", path.display());

        let file = File::open(path).map_err(|source| WordListError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        let list = Self::load(io::BufReader::new(file))?;

        info!("Loaded {} words from {}", list.len(), path.display());

        Ok(list)
    }

    pub fn bundled() -> Self {
        Self::from_words(BUNDLED_WORDS.lines())
    }

    /// Try each path in order and fall back to the bundled list.
    /// Unreadable or empty sources are skipped.
    pub fn load_first_available<P: AsRef<Path>>(paths: &[P]) -> Self {
        for path in paths {
            let path = path.as_ref();
            match Self::from_path(path) {
                Ok(list) if !list.is_empty() => return list,
                Ok(_) => warn!("Word list {} has no usable words, skipping", path.display()),
                Err(e) => warn!("Skipping word list {}: {}", path.display(), e),
            }
        }

        let list = Self::bundled();
        info!("Using bundled word list ({} words)", list.len());
        list
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}
