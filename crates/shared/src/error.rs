use thiserror::Error;

/// Failure taxonomy for a single client request.
///
/// Every variant terminates an in-flight dialog-driven flow; none are
/// retried automatically.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request never completed: connect failure, timeout, or the
    /// response body could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status. The body, when
    /// textual, carries the service's own description of the failure.
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but did not match the wire contract.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
