use std::sync::Arc;

use async_trait::async_trait;

use crate::contact::model::{Submission, SubmissionResult};

#[derive(Debug)]
pub enum TransportError {
    /// The request never produced a response (offline, DNS, refused, CORS).
    Network(String),
    /// Non-2xx status without a readable result body.
    Status(u16),
    /// A 2xx response whose body wasn't a submission result.
    Decode(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "Network error: {msg}"),
            TransportError::Status(code) => write!(f, "Unexpected status {code}"),
            TransportError::Decode(msg) => write!(f, "Unreadable response: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Carries a submission to the mail relay.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionResult, TransportError>;
}

#[async_trait]
impl<T: ContactTransport + ?Sized> ContactTransport for Arc<T> {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionResult, TransportError> {
        (**self).submit(submission).await
    }
}

/// Posts JSON to the relay endpoint. No timeout is set: the form waits for the request to settle.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionResult, TransportError> {
        let resp = self
            .client
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        match serde_json::from_slice::<SubmissionResult>(&body) {
            Ok(mut result) => {
                // A failing status never counts as success, whatever the body claims.
                result.success &= status.is_success();
                Ok(result)
            }
            Err(_) if !status.is_success() => Err(TransportError::Status(status.as_u16())),
            Err(e) => Err(TransportError::Decode(e.to_string())),
        }
    }
}
