//! Presentation state for the booth UI.
//!
//! The view model is a plain value: panes, dialog, and the text bound to the
//! display fields. Rendering is a projection of this state; none of the
//! transitions here perform I/O or fail.

use shared::{domain::PublicKey, protocol::ElectionInfo};

/// Top-level mutually exclusive view. Exactly one pane is visible at any
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Landing,
    Election,
}

/// Modal overlay carrying a message and an optional single action control.
/// Independent of the pane: it can cover either one, and closing it never
/// changes which pane is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    Hidden,
    Visible {
        message: String,
        has_action_button: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pane: Pane,
    dialog: DialogState,
    public_key: Option<String>,
    election_title: String,
    election_description: String,
}

impl ViewModel {
    /// Starts at the landing pane with the dialog hidden. Nothing here
    /// persists across a restart.
    pub fn new() -> Self {
        Self {
            pane: Pane::Landing,
            dialog: DialogState::Hidden,
            public_key: None,
            election_title: String::new(),
            election_description: String::new(),
        }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn is_dialog_visible(&self) -> bool {
        matches!(self.dialog, DialogState::Visible { .. })
    }

    /// Key display field on the landing pane; `None` until the startup
    /// fetch succeeds.
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    pub fn election_title(&self) -> &str {
        &self.election_title
    }

    pub fn election_description(&self) -> &str {
        &self.election_description
    }

    /// Makes the dialog visible over whatever pane is current. A visible
    /// dialog always carries a non-empty message.
    pub fn show_dialog(&mut self, message: impl Into<String>, show_action_button: bool) {
        let message = message.into();
        debug_assert!(!message.is_empty(), "dialog message must be non-empty");
        self.dialog = DialogState::Visible {
            message,
            has_action_button: show_action_button,
        };
    }

    /// Hides the dialog. Idempotent, and never touches the pane.
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Hidden;
    }

    /// Shows `target` and hides the other pane. Idempotent.
    pub fn switch_pane(&mut self, target: Pane) {
        self.pane = target;
    }

    pub fn set_public_key(&mut self, key: &PublicKey) {
        self.public_key = Some(key.0.clone());
    }

    /// Binds the election pane's display fields. The title is rendered as
    /// `Election "<title>"`; the description is shown verbatim.
    pub fn set_election_info(&mut self, info: &ElectionInfo) {
        self.election_title = format!("Election \"{}\"", info.title);
        self.election_description = info.description.clone();
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
