use std::time::Duration;

use reqwest::{Client, Response};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use shared::{
    domain::{InvitationToken, PublicKey},
    error::ClientError,
    protocol::{self, ElectionInfo},
};

pub mod flow;
pub mod view;

pub use flow::{FlowError, FlowState, JoinFlow};
pub use view::{DialogState, Pane, ViewModel};

/// Upper bound on any single round trip so a progress dialog cannot hang
/// forever on a stalled call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
#[error("invalid server url '{url}': {source}")]
pub struct InvalidServerUrl {
    pub url: String,
    #[source]
    pub source: url::ParseError,
}

/// HTTP client for the election bulletin-board service.
///
/// Each operation is a single request/response round trip; any non-success
/// status, transport failure, or contract-violating body maps into
/// [`ClientError`]. No retries.
#[derive(Debug)]
pub struct ElectionClient {
    http: Client,
    base_url: String,
}

impl ElectionClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self, InvalidServerUrl> {
        Self::with_timeout(server_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        server_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InvalidServerUrl> {
        let server_url = server_url.into();
        Url::parse(&server_url).map_err(|source| InvalidServerUrl {
            url: server_url.clone(),
            source,
        })?;
        // Same failure mode as `Client::new()`: only panics if the TLS
        // backend cannot initialize.
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build http client");
        Ok(Self {
            http,
            base_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /api/pubkey`; the body is the published key, displayed verbatim.
    pub async fn fetch_public_key(&self) -> Result<PublicKey, ClientError> {
        let url = self.endpoint(protocol::PUBKEY_PATH);
        debug!(%url, "fetching service public key");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = check_status(response).await?;
        let body = response.text().await.map_err(transport)?;
        Ok(PublicKey(body))
    }

    /// `GET /api/election/join<token>`. The response body is ignored; only
    /// the status matters.
    pub async fn join_election(&self, token: &InvitationToken) -> Result<(), ClientError> {
        let url = self.endpoint(&protocol::join_path(token));
        debug!(%url, "joining election");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        check_status(response).await?;
        Ok(())
    }

    /// `GET /api/election/info/<token>`, JSON body per the wire contract.
    pub async fn fetch_election_info(
        &self,
        token: &InvitationToken,
    ) -> Result<ElectionInfo, ClientError> {
        let url = self.endpoint(&protocol::info_path(token));
        debug!(%url, "fetching election info");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = check_status(response).await?;
        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|err| {
            warn!(%url, error = %err, "election info body violates wire contract");
            ClientError::MalformedResponse(err.to_string())
        })
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // The service responds with plain-text error bodies; carry them into
    // the user-facing message when present.
    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), body = %body, "request rejected by service");
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
