use test_utils::insta_snapshot;

use super::format_state;
use super::help_text;
use super::merge_outcome;
use super::parse_language;
use super::parse_position;
use super::restore_record;
use crate::domain::models::ChatRecord;
use crate::domain::models::Outcome;
use crate::domain::models::SessionState;

#[test]
fn it_renders_help() {
    insta_snapshot(|| {
        insta::assert_snapshot!(help_text());
    });
}

#[test]
fn it_parses_source_languages() {
    assert_eq!(parse_language(Some("FR"), true), Some("fr".to_string()));
    assert_eq!(parse_language(Some("auto"), true), Some("auto".to_string()));
    assert_eq!(parse_language(Some("de"), true), None);
    assert_eq!(parse_language(None, true), None);
}

#[test]
fn it_rejects_auto_as_a_target() {
    assert_eq!(parse_language(Some("auto"), false), None);
    assert_eq!(parse_language(Some("tr"), false), Some("tr".to_string()));
}

#[test]
fn it_applies_finished_outcomes() {
    let current = SessionState::new("auto", "en").with_input("Bonjour, ça va");
    let finished = SessionState::new("fr", "en")
        .with_input("Bonjour")
        .with_output("Hello");

    let next = merge_outcome(&current, &Outcome::new(finished));

    assert_eq!(next.source_lang, "fr");
    assert_eq!(next.output_text, "Hello");
    assert_eq!(next.input_text, "Bonjour, ça va");
}

#[test]
fn it_keeps_a_source_picked_while_translating() {
    // Dispatched with `auto`, then `/source es` before the result came back.
    let dispatched = SessionState::new("auto", "en").with_input("Hola");
    let current = dispatched.with_source("es");
    let finished = dispatched.with_source("fr").with_output("Hello");

    let next = merge_outcome(&current, &Outcome::new(finished));

    assert_eq!(next.source_lang, "es");
    assert_eq!(next.output_text, "Hello");
}

#[test]
fn it_keeps_an_explicit_source_over_a_stale_one() {
    let current = SessionState::new("ru", "en").with_input("Привет");
    let finished = SessionState::new("fr", "en").with_output("Hi");

    let next = merge_outcome(&current, &Outcome::new(finished));

    assert_eq!(next.source_lang, "ru");
    assert_eq!(next.output_text, "Hi");
}

#[test]
fn it_leaves_auto_when_nothing_was_resolved() {
    let current = SessionState::default().with_input("  ");
    let finished = SessionState::default().with_output("");

    let next = merge_outcome(&current.with_output("stale"), &Outcome::new(finished));

    assert_eq!(next.source_lang, "auto");
    assert_eq!(next.output_text, "");
}

#[test]
fn it_parses_history_positions() {
    assert_eq!(parse_position(Some("2")), Some(2));
    assert_eq!(parse_position(Some("0")), None);
    assert_eq!(parse_position(Some("-1")), None);
    assert_eq!(parse_position(Some("two")), None);
    assert_eq!(parse_position(None), None);
}

#[test]
fn it_restores_a_past_translation() {
    let state = SessionState::new("fr", "es")
        .with_input("Draft")
        .with_output("Borrador");
    let record = ChatRecord::new("Bonjour", "Hello");

    let next = restore_record(&state, &record);

    assert_eq!(next.input_text, "Bonjour");
    assert_eq!(next.output_text, "Hello");
    assert_eq!(next.source_lang, "fr");
    assert_eq!(next.target_lang, "es");
}

#[test]
fn it_ignores_outcomes_with_notices() {
    let current = SessionState::default().with_input("Short").with_output("Old");
    let outcome = Outcome::with_notice(
        SessionState::new("fr", "en").with_output("New"),
        "Please enter your text.",
    );

    assert_eq!(merge_outcome(&current, &outcome), current);
}

#[test]
fn it_formats_the_state() {
    let state = SessionState::new("ru", "es")
        .with_input("Привет")
        .with_output("Hola");

    assert_eq!(
        format_state(&state),
        "[Russian (Русский) -> Spanish (Español)]\n  input:  Привет\n  output: Hola"
    );
}
