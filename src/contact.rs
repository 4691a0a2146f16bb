use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::config;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A validated contact request, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// `name=..&email=..&message=..`, percent-encoded.
    pub fn encode(&self) -> String {
        [("name", &self.name), ("email", &self.email), ("message", &self.message)]
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Where contact submissions go.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Posts the form-encoded body to a form handler over HTTP.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(config::contact_endpoint())
    }
}

#[async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(submission.encode())
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => error!("Form handler rejected submission ({}): {}", status, body.error),
            Err(_) => error!("Form handler rejected submission with status {}", status),
        }
        Err(SubmitError::Status(status))
    }
}

/// Sends one submission. There are no retries: whatever the transport
/// reports is final.
pub async fn deliver<T: ContactTransport + ?Sized>(
    transport: &T,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    match transport.send(submission).await {
        Ok(()) => {
            info!("Contact form submitted");
            Ok(())
        }
        Err(e) => {
            error!("Contact form submission failed: {}", e);
            Err(e)
        }
    }
}
