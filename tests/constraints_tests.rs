use wordle_helper::{filter, load_dictionary, ConstraintSet, Error, Feedback, FeedbackError, LetterSet, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| w(s)).collect()
}

fn is_subsequence(sub: &[Word], full: &[Word]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|word| rest.any(|candidate| candidate == word))
}

#[test]
fn test_correct_mark_is_singleton() {
    let guess = w("crane");
    let constraints = ConstraintSet::from_text(&guess, "C....").unwrap();
    assert_eq!(constraints.allowed(0), LetterSet::single(b'c'));
    assert!(constraints.required().contains(b'c'));
}

#[test]
fn test_present_mark_excluded_only_here() {
    let constraints = ConstraintSet::from_text(&w("crane"), ".r...").unwrap();
    assert!(!constraints.allowed(1).contains(b'r'));
    for i in [0, 2, 3, 4] {
        assert!(constraints.allowed(i).contains(b'r'), "r should be allowed at {}", i);
    }
    assert!(constraints.required().contains(b'r'));
}

#[test]
fn test_absent_letter_excluded_everywhere() {
    let constraints = ConstraintSet::from_text(&w("crane"), ".r...").unwrap();
    for i in 0..5 {
        for letter in [b'c', b'a', b'n', b'e'] {
            assert!(!constraints.allowed(i).contains(letter));
        }
    }
    assert_eq!(constraints.required(), LetterSet::single(b'r'));
}

#[test]
fn test_apple_scenario() {
    let guess = w("apple");
    let constraints = ConstraintSet::from_text(&guess, "A....").unwrap();

    assert_eq!(constraints.allowed(0), LetterSet::single(b'a'));
    for i in 1..5 {
        for letter in [b'p', b'l', b'e'] {
            assert!(!constraints.allowed(i).contains(letter));
        }
    }

    // apple itself repeats the excluded p, l and e.
    let list = words(&["apple", "grape", "mango"]);
    assert!(filter(&list, &constraints).is_empty());

    let list = words(&["apple", "grape", "mango", "amiss"]);
    assert_eq!(filter(&list, &constraints), words(&["amiss"]));
}

#[test]
fn test_all_correct_keeps_only_guess() {
    let guess = w("crane");
    let constraints = ConstraintSet::build(&guess, &Feedback::ALL_CORRECT);
    for (i, &letter) in guess.letters().iter().enumerate() {
        assert_eq!(constraints.allowed(i), LetterSet::single(letter));
    }

    let list = words(&["slate", "crane", "crate", "trace", "nacre"]);
    assert_eq!(filter(&list, &constraints), vec![guess]);
}

#[test]
fn test_duplicate_letter_not_globally_excluded() {
    let guess = w("sassy");
    let constraints = ConstraintSet::from_text(&guess, "s....").unwrap();

    assert!(constraints.required().contains(b's'));
    assert!(!constraints.allowed(0).contains(b's'));
    assert!(!constraints.allowed(2).contains(b's'));
    assert!(!constraints.allowed(3).contains(b's'));
    assert!(constraints.allowed(1).contains(b's'));
    assert!(constraints.allowed(4).contains(b's'));

    let list = words(&["cords", "crest", "sound", "crane", "tulip"]);
    assert_eq!(filter(&list, &constraints), words(&["cords"]));
}

#[test]
fn test_triple_letter_guess() {
    let guess = w("geese");
    let feedback = Feedback::grade(&guess, &w("creep"));
    let constraints = ConstraintSet::build(&guess, &feedback);

    assert_eq!(constraints.allowed(2), LetterSet::single(b'e'));
    assert!(!constraints.allowed(1).contains(b'e'));
    assert!(!constraints.allowed(4).contains(b'e'));
    assert!(constraints.allowed(0).contains(b'e'));
    assert!(!constraints.allowed(0).contains(b'g'));

    let list = words(&["creep", "cheer", "sheep", "green"]);
    assert_eq!(filter(&list, &constraints), words(&["creep", "cheer"]));
}

#[test]
fn test_unconstrained_keeps_everything() {
    let list = words(&["crane", "crane", "slate"]);
    assert_eq!(filter(&list, &ConstraintSet::unconstrained()), list);
    assert_eq!(ConstraintSet::default(), ConstraintSet::unconstrained());
}

#[test]
fn test_filter_preserves_order_and_duplicates() {
    let list = words(&["crate", "grate", "slate", "crate", "irate", "skate"]);
    let constraints = ConstraintSet::from_text(&w("slate"), "..ATE").unwrap();
    let filtered = filter(&list, &constraints);
    assert_eq!(filtered, words(&["crate", "grate", "crate", "irate"]));
    assert_eq!(list.len(), 6);
}

#[test]
fn test_filter_empty_list() {
    let constraints = ConstraintSet::from_text(&w("crane"), "CRANE").unwrap();
    assert!(filter(&[], &constraints).is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let dictionary = load_dictionary();
    for (guess, typed) in [("crane", ".r..E"), ("slate", "s.a.."), ("sassy", "s...."), ("geese", ".eE..")] {
        let constraints = ConstraintSet::from_text(&w(guess), typed).unwrap();
        let once = filter(&dictionary, &constraints);
        let twice = filter(&once, &constraints);
        assert_eq!(once, twice, "filtering twice changed the result for {} {}", guess, typed);
    }
}

#[test]
fn test_filter_only_shrinks() {
    let dictionary = load_dictionary();
    for (guess, typed) in [("crane", "c...."), ("toast", "T.a.t"), ("fuzzy", ".....")] {
        let constraints = ConstraintSet::from_text(&w(guess), typed).unwrap();
        let filtered = filter(&dictionary, &constraints);
        assert!(filtered.len() <= dictionary.len());
        assert!(is_subsequence(&filtered, &dictionary));
    }
}

#[test]
fn test_graded_target_always_survives() {
    let dictionary = load_dictionary();
    let guesses = words(&["crane", "sassy", "geese", "mummy", "eerie"]);

    for target in dictionary.iter().step_by(7) {
        for guess in &guesses {
            let feedback = Feedback::grade(guess, target);
            let constraints = ConstraintSet::build(guess, &feedback);
            assert!(
                constraints.matches(target),
                "{} eliminated by {} {}",
                target,
                guess,
                feedback.encode(guess)
            );
            if guess != target {
                assert!(!constraints.matches(guess), "{} survived its own feedback", guess);
            }
        }
    }
}

#[test]
fn test_from_text_rejects_malformed_feedback() {
    let guess = w("crane");
    assert!(matches!(
        ConstraintSet::from_text(&guess, "C..n.."),
        Err(Error::MalformedFeedback(FeedbackError::Length { .. }))
    ));
    assert!(matches!(
        ConstraintSet::from_text(&guess, "C_.n."),
        Err(Error::MalformedFeedback(FeedbackError::InvalidCharacter { position: 1, .. }))
    ));
    assert!(matches!(
        ConstraintSet::from_text(&guess, "ABCDE"),
        Err(Error::MalformedFeedback(FeedbackError::LetterMismatch { position: 0, .. }))
    ));
}

#[test]
fn test_display_lists_allowed_letters() {
    let constraints = ConstraintSet::from_text(&w("crane"), "C....").unwrap();
    let text = constraints.to_string();
    assert!(text.starts_with("[c] "), "{}", text);
    assert!(text.ends_with("requires [c]"), "{}", text);
}
