use crate::candidate::CandidateFile;
use crate::constants::{CONVERT_FAILED_NOTICE, UPLOAD_FIELD_NAME};
use reqwest::multipart;
use std::sync::mpsc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input file: {0}")]
    ReadInput(#[from] std::io::Error),
    #[error("Invalid upload part: {0}")]
    InvalidPart(String),
    #[error("Could not connect to the conversion endpoint: {0}")]
    Connection(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Conversion endpoint returned HTTP {0}")]
    Status(u16),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("Request error: {0}")]
    Request(String),
}

impl ConvertError {
    /// The single notice shown to the user; the technical detail only
    /// goes to the logs.
    pub fn user_message(&self) -> String {
        CONVERT_FAILED_NOTICE.to_string()
    }
}

/// Terminal and intermediate states of one conversion request, reported
/// back to the UI over a channel.
#[derive(Debug, Clone)]
pub enum ConvertStatus {
    Started,
    Completed(Vec<u8>),
    Failed(String),
}

/// HTTP client for the external conversion endpoint.
///
/// One request at a time; the caller's state machine guards reentrancy.
#[derive(Clone)]
pub struct ConvertClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ConvertClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self, ConvertError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("pdf2pptx/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ConvertError::Request(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the candidate as a multipart body with one part named `file`
    /// and return the binary PPTX response.
    pub async fn convert(&self, candidate: &CandidateFile) -> Result<Vec<u8>, ConvertError> {
        let data = tokio::fs::read(&candidate.path).await?;

        let part = multipart::Part::bytes(data)
            .file_name(candidate.name.clone())
            .mime_str(&candidate.mime)
            .map_err(|e| ConvertError::InvalidPart(e.to_string()))?;
        let form = multipart::Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ConvertError::Timeout
                } else if e.is_connect() {
                    ConvertError::Connection(e.to_string())
                } else {
                    ConvertError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ConvertError::Body(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    /// Run one conversion on the runtime and report its outcome over the
    /// returned channel.
    ///
    /// Exactly one terminal status (`Completed` or `Failed`) is sent per
    /// request, so the caller's busy indicator always settles.
    pub fn execute(
        &self,
        runtime: &tokio::runtime::Handle,
        candidate: CandidateFile,
    ) -> mpsc::Receiver<ConvertStatus> {
        let (tx, rx) = mpsc::channel();
        let client = self.clone();

        runtime.spawn(async move {
            let _ = tx.send(ConvertStatus::Started);
            tracing::info!(name = %candidate.name, size = candidate.size, endpoint = %client.endpoint, "starting conversion upload");

            match client.convert(&candidate).await {
                Ok(bytes) => {
                    tracing::info!(bytes = bytes.len(), "conversion completed");
                    let _ = tx.send(ConvertStatus::Completed(bytes));
                }
                Err(e) => {
                    tracing::error!(error = %e, "conversion failed");
                    let _ = tx.send(ConvertStatus::Failed(e.user_message()));
                }
            }
        });

        rx
    }
}
