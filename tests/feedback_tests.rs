use test_case::test_case;
use wordle_entropy::dictionary::FALLBACK_WORDS;
use wordle_entropy::{
    decode, encode, Feedback, FeedbackCode, Word, WordleError, MAX_WORD_LENGTH, WORD_LENGTH,
};

fn w(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn test_all_correct() {
    let code = encode(&w("crane"), &w("crane")).unwrap();
    assert!(code.is_solved(WORD_LENGTH));
    assert_eq!(code, FeedbackCode::solved(WORD_LENGTH));
    assert_eq!(code.value(), 242);
}

#[test]
fn test_all_absent() {
    let code = encode(&w("quick"), &w("dream")).unwrap();
    assert_eq!(code, FeedbackCode(0));
}

#[test]
fn test_mixed_feedback() {
    let code = encode(&w("crane"), &w("charm")).unwrap();
    assert_eq!(
        code.to_feedbacks(WORD_LENGTH),
        vec![
            Feedback::Correct,
            Feedback::Present,
            Feedback::Correct,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
}

#[test]
fn test_first_position_is_most_significant() {
    let code = encode(&w("sxxxx"), &w("sabcd")).unwrap();
    assert_eq!(code.value(), 2 * 81);

    let code = encode(&w("xxxxs"), &w("abcds")).unwrap();
    assert_eq!(code.value(), 2);
}

#[test]
fn test_anagram_is_all_present() {
    // every letter of "rates" sits somewhere else in "stare"
    let code = encode(&w("rates"), &w("stare")).unwrap();
    assert_eq!(code.value(), 81 + 27 + 9 + 3 + 1);
    assert_eq!(code.value(), 121);
}

#[test]
fn test_duplicate_letters_credited_left_to_right() {
    // exact a, b, b consume three letters of "babab"; the leftover b and a go to the
    // first unmatched guess letters that want them
    let code = encode(&w("aabbb"), &w("babab")).unwrap();
    assert_eq!(code, FeedbackCode::parse("yggyg").unwrap());
    assert_eq!(code.value(), 81 + 2 * 27 + 2 * 9 + 3 + 2);
}

#[test]
fn test_more_repeats_in_guess_than_solution() {
    // three e's guessed, two in the solution: one exact, one present, one absent
    let code = encode(&w("geese"), &w("creep")).unwrap();
    let feedbacks = code.to_feedbacks(WORD_LENGTH);
    assert_eq!(
        feedbacks,
        vec![
            Feedback::Absent,
            Feedback::Present,
            Feedback::Correct,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
    let credited = feedbacks.iter().filter(|f| **f != Feedback::Absent).count();
    assert_eq!(credited, 2);

    // "water" has a single e; only the first e of "eerie" earns it
    let code = encode(&w("eerie"), &w("water")).unwrap();
    assert_eq!(code, FeedbackCode::parse("ybybb").unwrap());
}

#[test_case("speed", "creep", "byggb" ; "speed creep")]
#[test_case("arose", "creep", "bgbby" ; "arose creep")]
#[test_case("sores", "those", "yybyb" ; "sores those")]
#[test_case("speed", "abide", "bbyby" ; "speed abide")]
#[test_case("speed", "erase", "ybyyb" ; "speed erase")]
#[test_case("speed", "steal", "gbgbb" ; "speed steal")]
#[test_case("speed", "crepe", "bygyb" ; "speed crepe")]
#[test_case("tares", "scare", "byyyy" ; "tares scare")]
#[test_case("zitis", "zizel", "ggbbb" ; "zitis zizel")]
#[test_case("lemma", "legal", "ggbby" ; "lemma legal")]
#[test_case("roman", "apron", "yybyg" ; "roman apron")]
#[test_case("elite", "ledge", "yybbg" ; "elite ledge")]
fn test_feedback(guess: &str, solution: &str, expected: &str) {
    assert_eq!(
        encode(&w(guess), &w(solution)).unwrap(),
        FeedbackCode::parse(expected).unwrap(),
        "guess={}, solution={}",
        guess,
        solution
    );
}

#[test]
fn test_encode_self_is_solved() {
    for word in FALLBACK_WORDS.iter().chain(&["aaaaa", "geese", "speed"]) {
        let word = w(word);
        assert_eq!(
            encode(&word, &word).unwrap(),
            FeedbackCode::solved(WORD_LENGTH)
        );
    }
    let short = w("abc");
    assert_eq!(encode(&short, &short).unwrap().value(), 26);
}

#[test]
fn test_encode_is_deterministic() {
    for guess in FALLBACK_WORDS {
        for solution in FALLBACK_WORDS {
            let first = encode(&w(guess), &w(solution)).unwrap();
            let second = encode(&w(guess), &w(solution)).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_length_mismatch() {
    let err = encode(&w("crane"), &w("cranes")).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(
        err,
        WordleError::LengthMismatch {
            expected: 5,
            found: 6,
            ..
        }
    ));
}

#[test]
fn test_decode_inverts_packing() {
    for value in 0..FeedbackCode::num_codes(WORD_LENGTH) as u32 {
        let code = FeedbackCode(value);
        let digits = decode(code, WORD_LENGTH);
        assert_eq!(digits.len(), WORD_LENGTH);
        assert!(digits.iter().all(|d| d.digit() <= 2));
        assert_eq!(FeedbackCode::from_feedbacks(&digits), code);
    }
}

#[test]
fn test_encoded_codes_decode_to_word_length_digits() {
    for guess in FALLBACK_WORDS {
        for solution in FALLBACK_WORDS {
            let code = encode(&w(guess), &w(solution)).unwrap();
            assert!((code.value() as usize) < FeedbackCode::num_codes(WORD_LENGTH));
            assert_eq!(decode(code, WORD_LENGTH).len(), WORD_LENGTH);
        }
    }
}

#[test]
fn test_checked_feedbacks_rejects_out_of_range_codes() {
    assert!(FeedbackCode(242).fits(WORD_LENGTH));
    assert_eq!(
        FeedbackCode(242).checked_feedbacks(WORD_LENGTH),
        Some(vec![Feedback::Correct; WORD_LENGTH])
    );

    assert!(!FeedbackCode(243).fits(WORD_LENGTH));
    assert_eq!(FeedbackCode(243).checked_feedbacks(WORD_LENGTH), None);
    assert_eq!(FeedbackCode(9).checked_feedbacks(2), None);
    assert_eq!(FeedbackCode(0).checked_feedbacks(MAX_WORD_LENGTH + 1), None);
}

#[test]
fn test_code_range_at_max_word_length() {
    let solved = FeedbackCode::solved(MAX_WORD_LENGTH);
    assert_eq!(solved.value(), 3_486_784_400);
    assert_eq!(FeedbackCode::num_codes(MAX_WORD_LENGTH) as u64, 3_486_784_401);
    assert!(solved.fits(MAX_WORD_LENGTH));
    assert!(!FeedbackCode(u32::MAX).fits(MAX_WORD_LENGTH));
    assert!(!solved.fits(MAX_WORD_LENGTH + 1));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "above the maximum")]
fn test_solved_beyond_max_word_length() {
    FeedbackCode::solved(MAX_WORD_LENGTH + 1);
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackCode::parse("gybbb").unwrap();
    assert_eq!(
        pattern.to_feedbacks(WORD_LENGTH),
        vec![
            Feedback::Correct,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
    assert_eq!(pattern.value(), 2 * 81 + 27);

    let pattern2 = FeedbackCode::parse("21000").unwrap();
    assert_eq!(pattern, pattern2);
}

#[test]
fn test_pattern_parse_invalid() {
    assert!(FeedbackCode::parse("gybzb").is_none());
    assert!(FeedbackCode::parse("").is_none());
    assert!(FeedbackCode::parse("gggggggggggggggggggggg").is_none());
}

#[test]
fn test_feedback_digits_round_trip() {
    for feedback in Feedback::ALL {
        assert_eq!(Feedback::from_digit(feedback.digit()), Some(feedback));
    }
    assert_eq!(Feedback::from_digit(3), None);
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackCode::from_feedbacks(&[
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Correct,
    ]);
    assert_eq!(pattern.to_emoji_string(WORD_LENGTH), "🟩🟨⬛⬛🟩");
}
