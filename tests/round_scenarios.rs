use std::collections::HashSet;
use std::io::Write;

use lastletter::words::suggest::rarity;
use lastletter::{suggest, RejectReason, RoundState, WordList};
use tempfile::NamedTempFile;

fn sample_list() -> WordList {
    WordList::from_words([
        "cat", "tiger", "tea", "ant", "toad", "tzar", "team", "tuba", "table", "tree", "trip",
        "top", "tax", "tin", "ten", "tub", "twig",
    ])
}

#[test]
fn loaded_words_are_clean() -> std::io::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "Apple")?;
    writeln!(file, "  banana  ")?;
    writeln!(file)?;
    writeln!(file, "cherry pie")?;
    writeln!(file, "d0g")?;
    writeln!(file, "APPLE")?;

    let list = WordList::from_path(file.path()).unwrap();

    assert_eq!(list.len(), 2);
    for word in list.iter() {
        assert!(!word.is_empty());
        assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
    }

    Ok(())
}

#[test]
fn suggest_scenario_from_small_list() {
    let list = WordList::from_words(["cat", "tiger", "tea", "ant"]);
    let used = HashSet::new();

    assert_eq!(suggest(&list, 't', &used, 5), vec!["tea", "tiger"]);
}

#[test]
fn suggest_respects_used_words_and_limit() {
    let list = sample_list();
    let used: HashSet<String> = ["tea", "top", "tin"].iter().map(|w| w.to_string()).collect();

    for limit in 0..8 {
        let suggestions = suggest(&list, 't', &used, limit);
        assert!(suggestions.len() <= limit);
        assert!(suggestions.iter().all(|w| !used.contains(w)));
        assert!(suggestions.iter().all(|w| w.starts_with('t')));
    }
}

#[test]
fn suggest_is_deterministic() {
    let list = sample_list();
    let used: HashSet<String> = ["ten".to_string()].into_iter().collect();

    let first = suggest(&list, 't', &used, 5);
    let second = suggest(&list, 't', &used, 5);
    assert_eq!(first, second);

    // A list built from the same words in another order ranks the same way
    let mut reversed: Vec<String> = sample_list().iter().map(str::to_owned).collect();
    reversed.sort();
    reversed.reverse();
    let rebuilt = WordList::from_words(reversed);
    assert_eq!(suggest(&rebuilt, 't', &used, 5), first);
}

#[test]
fn suggestions_are_ordered_by_length_then_rarity() {
    let list = sample_list();
    let used = HashSet::new();

    let suggestions = suggest(&list, 't', &used, 100);
    for pair in suggestions.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let second = |w: &str| w.chars().nth(1).map_or(0, rarity);
        assert!(
            a.len() < b.len() || (a.len() == b.len() && second(a.as_str()) <= second(b.as_str())),
            "{a} ranked before {b}"
        );
    }
}

#[test]
fn first_submission_is_accepted() {
    let mut round = RoundState::new();

    round.submit("cat").unwrap();

    assert_eq!(round.current_letter(), Some('t'));
    assert_eq!(round.score(), 1);
    assert_eq!(round.longest_word(), Some("cat"));
}

#[test]
fn invalid_submissions_leave_round_unchanged() {
    let mut round = RoundState::new();
    round.submit("cat").unwrap();
    round.submit("tac").unwrap();
    let before = round.clone();

    assert_eq!(round.submit("").unwrap_err().reason(), RejectReason::Empty);
    assert_eq!(
        round.submit("123").unwrap_err().reason(),
        RejectReason::NonAlphabetic
    );
    assert_eq!(
        round.submit("cat").unwrap_err().reason(),
        RejectReason::AlreadyUsed
    );

    assert_eq!(round, before);
}

#[test]
fn reset_clears_round_but_not_word_list() {
    let list = sample_list();
    let list_before = list.clone();
    let mut round = RoundState::new();

    for word in ["cat", "tea", "ant", "tiger"] {
        round.submit(word).unwrap();
    }
    assert_eq!(round.score(), 4);

    round.reset();

    assert_eq!(round.score(), 0);
    assert!(round.used_words().is_empty());
    assert_eq!(round.current_letter(), None);
    assert_eq!(round.longest_word(), None);
    assert_eq!(list, list_before);
}

#[test]
fn chained_play_uses_suggestions() {
    let list = sample_list();
    let mut round = RoundState::new();
    round.submit("cat").unwrap();

    // Keep playing the top suggestion while one exists
    while let Some(letter) = round.current_letter() {
        let Some(next) = suggest(&list, letter, round.used_words(), 5).into_iter().next() else {
            break;
        };
        round.submit(&next).unwrap();
    }

    assert!(round.score() > 1);
    let letter = round.current_letter().unwrap();
    assert!(suggest(&list, letter, round.used_words(), 5).is_empty());
}
