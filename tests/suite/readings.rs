//! End-to-end readings through the public engine API.

use flames_engine::flames::{compute, elimination_order, evaluate, survivor_count, try_compute};
use flames_types::{InvalidInput, Name, NameSlot, ResultCode};
use proptest::prelude::*;

fn letters(codes: &[ResultCode]) -> String {
    codes.iter().map(|c| c.letter()).collect()
}

#[test]
fn known_pairs_cover_every_result() {
    let cases = [
        ("Leo", "Noah", 5, ResultCode::Friends),
        ("Olivia", "Ruby", 10, ResultCode::Love),
        ("Alice", "Bob", 8, ResultCode::Affection),
        ("Harry", "Sally", 6, ResultCode::Marriage),
        ("Romeo", "Juliet", 9, ResultCode::Enemy),
        ("Liam", "Mia", 1, ResultCode::Sister),
    ];
    for (a, b, survivors, expected) in cases {
        let first = Name::parse(NameSlot::First, a).unwrap();
        let second = Name::parse(NameSlot::Second, b).unwrap();
        let reading = evaluate(&first, &second);
        assert_eq!(reading.survivors, survivors, "{a} / {b}");
        assert_eq!(reading.code, expected, "{a} / {b}");
        assert_eq!(compute(a, b), expected);
    }
}

#[test]
fn multi_word_names_ignore_spaces() {
    assert_eq!(compute("Mary Jane", "Peter Parker"), ResultCode::Affection);
    assert_eq!(letters(&elimination_order(13)), "FMESL");
}

#[test]
fn strike_order_depends_only_on_count() {
    // Jack/Rose and Alice/Bob both leave eight letters
    assert_eq!(survivor_count("jack", "rose"), 8);
    assert_eq!(compute("Jack", "Rose"), compute("Alice", "Bob"));
}

#[test]
fn identical_names_cancel_completely() {
    assert_eq!(compute("anna", "anna"), ResultCode::Friends);
    assert_eq!(compute("Anna", "a n n a"), ResultCode::Friends);
}

#[test]
fn rejected_input_names_the_slot() {
    let err = try_compute("Bob", "J0hn").unwrap_err();
    assert_eq!(err.slot(), NameSlot::Second);
    assert_eq!(
        err.to_string(),
        "Partner 2 contains '0'; only letters and spaces are allowed"
    );
    assert_eq!(
        try_compute(" ", "Sam"),
        Err(InvalidInput::Empty {
            slot: NameSlot::First
        })
    );
}

proptest! {
    #[test]
    fn any_disallowed_character_is_rejected(
        prefix in "[a-z]{0,5}",
        bad in "[0-9!@#$%^&*().,'-]",
        suffix in "[a-z]{0,5}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        let rejected = matches!(
            try_compute(&name, "Sam"),
            Err(InvalidInput::DisallowedCharacter { slot: NameSlot::First, .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn valid_names_always_yield_a_result(
        a in "[A-Za-z][A-Za-z ]{0,20}",
        b in "[A-Za-z][A-Za-z ]{0,20}",
    ) {
        let code = try_compute(&a, &b).unwrap();
        prop_assert!(ResultCode::ALL.contains(&code));
    }
}
