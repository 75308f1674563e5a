//! Integration tests for the FormStore:
//! - Submit gating (errors block, valid input passes)
//! - Error record replacement (no stale messages after a fix)
//! - Position switching and conditional-field guards
//! - Snapshot lifecycle (capture after success, clear on dismissal)
//! - String-keyed update entry point

use form::{Field, FormError, FormStore, Position, Skill};
use pretty_assertions::assert_eq;

/// Fill the store with the all-valid developer application from the rules'
/// worked example.
fn fill_valid(store: &mut FormStore) {
    store.set_text(Field::FullName, "Ada").unwrap();
    store.set_text(Field::Email, "ada@x.com").unwrap();
    store.set_text(Field::PhoneNumber, "5551234567").unwrap();
    store.set_text(Field::RelevantExperience, "3").unwrap();
    store.set_skill(Skill::Javascript, true);
    store.set_text(Field::InterviewTime, "2024-01-01T10:00").unwrap();
}

#[test]
fn submit_blocks_until_valid_then_passes() {
    let mut store = FormStore::new();

    assert!(!store.submit(), "empty form must not submit");
    assert!(store.error(Field::FullName).is_some());
    assert!(store.error(Field::Email).is_some());
    assert!(store.snapshot().is_none(), "no snapshot on failure");

    fill_valid(&mut store);
    assert!(store.submit());
    assert!(store.errors().is_empty());
}

#[test]
fn error_record_is_replaced_not_merged() {
    let mut store = FormStore::new();
    fill_valid(&mut store);
    store.set_text(Field::Email, "nope").unwrap();

    assert!(!store.submit());
    assert_eq!(store.error(Field::Email), Some("Email is invalid"));
    assert_eq!(store.errors().len(), 1);

    store.set_text(Field::Email, "ada@x.com").unwrap();
    assert!(store.submit());
    assert_eq!(store.error(Field::Email), None, "fixed field must clear");
}

#[test]
fn switching_position_swaps_conditional_fields() {
    let mut store = FormStore::new();
    fill_valid(&mut store);

    // Conditional fields follow the guard.
    assert_eq!(
        store.set_text(Field::PortfolioUrl, "https://ada.dev"),
        Err(FormError::NotActive(Field::PortfolioUrl))
    );

    store.set_position(Position::Designer);
    // Experience survives the Developer -> Designer switch.
    assert_eq!(
        store.values().text(Field::RelevantExperience),
        Some("3")
    );
    store.set_text(Field::PortfolioUrl, "https://ada.dev/work").unwrap();
    assert!(store.submit());

    store.set_position(Position::Manager);
    assert!(!store.submit());
    assert!(store.error(Field::ManagementExperience).is_some());
    // Designer errors cannot survive the switch.
    assert_eq!(store.error(Field::PortfolioUrl), None);

    // Manager -> Developer: no stale management error either.
    store.set_position(Position::Developer);
    store.set_text(Field::RelevantExperience, "3").unwrap();
    assert!(store.submit());
    assert_eq!(store.error(Field::ManagementExperience), None);
}

#[test]
fn snapshot_captured_after_success_and_cleared_on_dismissal() {
    let mut store = FormStore::new();
    fill_valid(&mut store);

    assert!(store.submit());
    store.capture_snapshot();
    let snapshot = store.snapshot().expect("snapshot after capture").clone();
    assert_eq!(&snapshot, store.values());

    // Edits after capture do not touch the snapshot.
    store.set_text(Field::FullName, "Grace").unwrap();
    assert_eq!(
        store.snapshot().map(|s| s.full_name.as_str()),
        Some("Ada")
    );

    store.clear_snapshot();
    assert!(store.snapshot().is_none());
}

#[test]
fn set_field_accepts_wire_names() {
    let mut store = FormStore::new();

    store.set_field("fullName", "Ada").unwrap();
    store.set_field("email", "ada@x.com").unwrap();
    store.set_field("phoneNumber", "5551234567").unwrap();
    store.set_field("position", "Designer").unwrap();
    store.set_field("relevantExperience", "3").unwrap();
    store.set_field("portfolioURL", "https://ada.dev").unwrap();
    store.set_field("interviewTime", "2024-01-01T10:00").unwrap();
    store.set_skill(Skill::Css, true);

    assert!(store.submit());

    assert_eq!(
        store.set_field("attendingWithGuest", "yes"),
        Err(FormError::UnknownField("attendingWithGuest".into()))
    );
    assert_eq!(
        store.set_field("position", "Astronaut"),
        Err(FormError::UnknownPosition("Astronaut".into()))
    );
    assert_eq!(
        store.set_field("additionalSkills", "true"),
        Err(FormError::NotText(Field::AdditionalSkills))
    );
}
