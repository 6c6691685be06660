//! Wire contract for the election bulletin-board service.

use serde::{Deserialize, Serialize};

use crate::domain::InvitationToken;

/// Path of the published public key. Raw text response.
pub const PUBKEY_PATH: &str = "/api/pubkey";

/// Join path. The percent-encoded token is concatenated directly after
/// `join` — not a path segment, not a query parameter. This shape is part of
/// the deployed server contract and must not be "fixed" client-side.
pub fn join_path(token: &InvitationToken) -> String {
    format!("/api/election/join{}", token.percent_encoded())
}

/// Election info path; here the token is a regular trailing segment.
pub fn info_path(token: &InvitationToken) -> String {
    format!("/api/election/info/{}", token.percent_encoded())
}

/// Election metadata as served by `GET /api/election/info/<token>`.
///
/// The deployed service spells the description field `desription`. That
/// misspelling is the wire contract: we deserialize it as the primary name
/// and accept the corrected spelling as an alias so a fixed server keeps
/// working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionInfo {
    pub title: String,
    #[serde(rename = "desription", alias = "description")]
    pub description: String,
}
