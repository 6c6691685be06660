use super::*;
use shared::{domain::PublicKey, protocol::ElectionInfo};

#[test]
fn starts_on_landing_pane_with_dialog_hidden() {
    let view = ViewModel::new();
    assert_eq!(view.pane(), Pane::Landing);
    assert_eq!(*view.dialog(), DialogState::Hidden);
    assert!(view.public_key().is_none());
}

#[test]
fn close_dialog_is_idempotent_from_hidden() {
    let mut view = ViewModel::new();
    view.close_dialog();
    view.close_dialog();
    assert_eq!(*view.dialog(), DialogState::Hidden);
}

#[test]
fn show_dialog_records_message_and_button() {
    let mut view = ViewModel::new();
    view.show_dialog("Joining election...", false);
    assert_eq!(
        *view.dialog(),
        DialogState::Visible {
            message: "Joining election...".to_string(),
            has_action_button: false,
        }
    );

    view.show_dialog("Something went wrong", true);
    assert_eq!(
        *view.dialog(),
        DialogState::Visible {
            message: "Something went wrong".to_string(),
            has_action_button: true,
        }
    );
}

#[test]
fn exactly_one_pane_is_visible_for_any_switch_sequence() {
    let mut view = ViewModel::new();
    for target in [
        Pane::Election,
        Pane::Election,
        Pane::Landing,
        Pane::Election,
        Pane::Landing,
        Pane::Landing,
    ] {
        view.switch_pane(target);
        // `pane()` is the single visible pane; the other is hidden by
        // construction.
        assert_eq!(view.pane(), target);
    }
}

#[test]
fn dialog_transitions_never_change_the_pane() {
    let mut view = ViewModel::new();
    view.switch_pane(Pane::Election);

    view.show_dialog("overlay", true);
    assert_eq!(view.pane(), Pane::Election);

    view.close_dialog();
    assert_eq!(view.pane(), Pane::Election);
}

#[test]
fn set_public_key_binds_display_field_verbatim() {
    let mut view = ViewModel::new();
    view.set_public_key(&PublicKey("PK123".to_string()));
    assert_eq!(view.public_key(), Some("PK123"));
}

#[test]
fn set_election_info_formats_title_and_copies_description() {
    let mut view = ViewModel::new();
    view.set_election_info(&ElectionInfo {
        title: "Vote".to_string(),
        description: "Pick one".to_string(),
    });
    assert_eq!(view.election_title(), "Election \"Vote\"");
    assert_eq!(view.election_description(), "Pick one");
}
