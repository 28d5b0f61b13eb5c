use wordle_entropy::dictionary::FALLBACK_WORDS;
use wordle_entropy::{encode, CandidateSet, FeedbackCode, Word, WordleError, WORD_LENGTH};

fn w(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn test_word_is_normalized() {
    let word = Word::new("  CrAnE \n").unwrap();
    assert_eq!(word.as_str(), "crane");
    assert_eq!(word.len(), 5);
    assert_eq!(word.to_string(), "crane");
    assert_eq!("Slate".parse::<Word>().unwrap(), w("slate"));
}

#[test]
fn test_invalid_words() {
    for bad in ["", "   ", "cr4ne", "crâne", "cra ne", "abcdefghijklmnopqrstu"] {
        let err = Word::new(bad).unwrap_err();
        assert!(err.is_invalid_input(), "accepted {:?}", bad);
    }
    assert!(matches!(
        Word::with_length("crane", 4),
        Err(WordleError::LengthMismatch { .. })
    ));
}

#[test]
fn test_candidate_set_drops_duplicates_in_order() {
    let set = CandidateSet::from_strs(&["crane", "slate", "CRANE", "trace", "slate"], 5).unwrap();
    let words: Vec<_> = set.iter().map(|w| w.as_str()).collect();
    assert_eq!(words, vec!["crane", "slate", "trace"]);
    assert_eq!(set.word_length(), 5);
}

#[test]
fn test_empty_universe() {
    let empty: Vec<Word> = vec![];
    assert!(matches!(
        CandidateSet::new(empty, WORD_LENGTH),
        Err(WordleError::EmptyUniverse)
    ));
}

#[test]
fn test_universe_rejects_wrong_length() {
    let err = CandidateSet::from_strs(&["crane", "cranes"], WORD_LENGTH).unwrap_err();
    assert!(err.is_invalid_input());

    let err = CandidateSet::new(vec![w("crane"), w("abc")], WORD_LENGTH).unwrap_err();
    assert!(matches!(err, WordleError::LengthMismatch { found: 3, .. }));
}

#[test]
fn test_filter_is_sound_and_monotone() {
    let universe = CandidateSet::from_strs(FALLBACK_WORDS, WORD_LENGTH).unwrap();

    for guess in universe.iter() {
        for target in universe.iter() {
            let code = encode(guess, target).unwrap();
            let filtered = universe.filtered(guess, code).unwrap();

            assert!(
                filtered.contains(target),
                "filtering by '{}' lost '{}'",
                guess,
                target
            );
            assert!(filtered.len() <= universe.len());
            assert!(filtered.iter().all(|w| universe.contains(w)));
        }
    }
}

#[test]
fn test_filter_keeps_everything_only_for_single_bucket() {
    let universe = CandidateSet::from_strs(&["aback", "abase", "abate"], WORD_LENGTH).unwrap();

    // "zzzzz" scores all-absent against every word, so nothing is eliminated
    let guess = w("zzzzz");
    let filtered = universe.filtered(&guess, FeedbackCode(0)).unwrap();
    assert_eq!(filtered, universe);

    // "abase" splits the words into separate buckets
    let guess = w("abase");
    let code = encode(&guess, &w("abate")).unwrap();
    let filtered = universe.filtered(&guess, code).unwrap();
    assert!(filtered.len() < universe.len());
}

#[test]
fn test_filter_to_empty_remembers_length() {
    let mut set = CandidateSet::from_strs(&["crane", "slate"], WORD_LENGTH).unwrap();
    set.retain_matching(&w("zzzzz"), FeedbackCode::solved(WORD_LENGTH))
        .unwrap();
    assert!(set.is_empty());
    assert_eq!(set.word_length(), WORD_LENGTH);
}

#[test]
fn test_filter_rejects_wrong_length_guess() {
    let mut set = CandidateSet::from_strs(&["crane", "slate"], WORD_LENGTH).unwrap();
    let err = set.retain_matching(&w("cranes"), FeedbackCode(0)).unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(set.len(), 2);
}
