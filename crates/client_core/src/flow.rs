//! The join flow: an explicit state machine coupling the election client and
//! the view model.
//!
//! `Idle -> Joining -> FetchingInfo -> Displayed`, with every failure from
//! `Joining` or `FetchingInfo` landing in `Error` (dialog visible, action
//! button shown) rather than silently back in `Idle`.

use thiserror::Error;
use tracing::{error, info};

use shared::{
    domain::{InvitationToken, PublicKey},
    error::ClientError,
};

use crate::{
    view::{Pane, ViewModel},
    ElectionClient,
};

const JOINING_MESSAGE: &str = "Joining election...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Joining,
    FetchingInfo,
    Displayed,
    Error,
}

#[derive(Debug, Error)]
pub enum FlowError {
    /// A join sequence is already in flight; the trigger should be disabled
    /// until it settles, but a racing call is rejected rather than run.
    #[error("a join is already in progress")]
    JoinInProgress,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Drives one join-then-fetch sequence at a time against a view model.
pub struct JoinFlow {
    pub(crate) state: FlowState,
}

impl JoinFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, FlowState::Joining | FlowState::FetchingInfo)
    }

    /// Runs the full join sequence for `token`.
    ///
    /// The progress dialog is shown before the join request is issued; the
    /// info fetch starts only after the join completed successfully; and on
    /// success the election pane's fields are populated before the dialog is
    /// closed and the pane switched, so the dialog never disappears ahead of
    /// the destination content. A failed attempt is terminal: the caller may
    /// retry with a fresh call.
    pub async fn join(
        &mut self,
        client: &ElectionClient,
        view: &mut ViewModel,
        token: &InvitationToken,
    ) -> Result<(), FlowError> {
        if self.is_in_flight() {
            return Err(FlowError::JoinInProgress);
        }

        self.state = FlowState::Joining;
        view.show_dialog(JOINING_MESSAGE, false);

        if let Err(err) = client.join_election(token).await {
            self.fail(view, format!("Failed to join election: {err}"));
            return Err(err.into());
        }

        self.state = FlowState::FetchingInfo;
        match client.fetch_election_info(token).await {
            Ok(info) => {
                view.set_election_info(&info);
                view.close_dialog();
                view.switch_pane(Pane::Election);
                self.state = FlowState::Displayed;
                info!(token = %token, title = %info.title, "election joined and displayed");
                Ok(())
            }
            Err(err) => {
                self.fail(view, format!("Failed to load election info: {err}"));
                Err(err.into())
            }
        }
    }

    fn fail(&mut self, view: &mut ViewModel, message: String) {
        error!(%message, "join flow failed");
        self.state = FlowState::Error;
        view.show_dialog(message, true);
    }
}

impl Default for JoinFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Startup half of the protocol: fetch the published public key and bind it
/// to the landing pane. On failure the landing pane stays current and a
/// dismissible error dialog is shown instead of failing silently.
pub async fn display_public_key(
    client: &ElectionClient,
    view: &mut ViewModel,
) -> Result<PublicKey, ClientError> {
    match client.fetch_public_key().await {
        Ok(key) => {
            view.set_public_key(&key);
            Ok(key)
        }
        Err(err) => {
            error!(error = %err, "failed to fetch service public key");
            view.show_dialog(format!("Failed to fetch public key: {err}"), true);
            Err(err)
        }
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
